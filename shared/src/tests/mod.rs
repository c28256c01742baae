mod mock_repository_tests;
