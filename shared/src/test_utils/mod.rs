pub mod http_test_utils;
pub mod mock_user_repository;
pub mod sqlite_test_utils;
pub mod test_logging;
