/*
The protocol modules below are the prost/tonic output for Flight.proto and
FlightSql.proto, checked in so the crate builds without protoc. To regenerate:

pub mod arrow_flight_protocol {
    tonic::include_proto!("arrow.flight.protocol");
}

pub mod arrow_flight_protocol_sql {
    tonic::include_proto!("arrow.flight.protocol.sql");
}
 */

#[path = "arrow.flight.protocol.rs"]
pub mod arrow_flight_protocol;

#[path = "arrow.flight.protocol.sql.rs"]
pub mod arrow_flight_protocol_sql;

pub mod error;
pub mod flight_sql_command;
pub mod server;
pub mod service;
pub mod sql_info;
pub mod util;
