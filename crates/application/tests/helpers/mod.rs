mod mock_name_servers;

pub use mock_name_servers::{ip, MockNameServers};
