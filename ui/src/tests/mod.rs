pub(crate) mod mock_api;
