use std::env;
use tonic::transport::Server;

use arrow_flightsql_server::arrow_flight_protocol_sql::SqlInfo;
use arrow_flightsql_server::error::ServerError;
use arrow_flightsql_server::server::{BaseServer, FlightSqlServer};
use arrow_flightsql_server::service::FlightSqlService;

/// A server exposing only the SqlInfo registry. Everything else answers
/// Unimplemented until a concrete engine overrides it.
struct StaticServer {
    base: BaseServer,
}

impl StaticServer {
    fn new() -> StaticServer {
        let base = BaseServer::new();
        base.register_sql_info(SqlInfo::FlightSqlServerName as u32, "arrow-flightsql-server");
        base.register_sql_info(
            SqlInfo::FlightSqlServerVersion as u32,
            env!("CARGO_PKG_VERSION"),
        );
        base.register_sql_info(SqlInfo::FlightSqlServerArrowVersion as u32, "1.3");
        base.register_sql_info(SqlInfo::FlightSqlServerReadOnly as u32, true);
        StaticServer { base }
    }
}

#[tonic::async_trait]
impl FlightSqlServer for StaticServer {
    fn base(&self) -> &BaseServer {
        &self.base
    }
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let server_address = env::var("SERVER_ADDRESS").unwrap_or("0.0.0.0:50051".to_string());

    let addr = server_address.parse()?;
    let service = FlightSqlService::new(StaticServer::new());

    log::info!("flight sql server listening on {}", addr);

    Server::builder()
        .add_service(service.into_service())
        .serve(addr)
        .await?;

    Ok(())
}
