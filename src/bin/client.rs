use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::buffer::Buffer;
use arrow::ipc::reader::{read_dictionary, read_record_batch};
use arrow::ipc::{root_as_message, MessageHeader};
use arrow::record_batch::RecordBatch;
use clap::{arg, Command};
use prost::Message;
use tonic::transport::Channel;
use tonic::Streaming;

use arrow_flightsql_server::arrow_flight_protocol::flight_descriptor::DescriptorType;
use arrow_flightsql_server::arrow_flight_protocol::flight_service_client::FlightServiceClient;
use arrow_flightsql_server::arrow_flight_protocol::{FlightData, FlightDescriptor, FlightInfo};
use arrow_flightsql_server::arrow_flight_protocol_sql::{
    CommandGetCatalogs, CommandGetSqlInfo, CommandGetTableTypes, CommandStatementQuery,
};
use arrow_flightsql_server::util::{schema_from_ipc_message, ProstAnyExt, ProstMessageExt};

#[derive(Debug)]
pub enum ClientError {
    Logic(String),
    ArrowError(String),
    Tonic(String),
    DataError(String),
}

impl From<arrow::error::ArrowError> for ClientError {
    fn from(error: arrow::error::ArrowError) -> Self {
        ClientError::ArrowError(error.to_string())
    }
}

impl From<tonic::Status> for ClientError {
    fn from(status: tonic::Status) -> Self {
        ClientError::Tonic(format!("{}", status))
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Logic(e) => write!(f, "logic error: {}", e),
            ClientError::ArrowError(e) => write!(f, "arrow error: {}", e),
            ClientError::Tonic(e) => write!(f, "grpc error: {}", e),
            ClientError::DataError(e) => write!(f, "data error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

fn cli() -> Command<'static> {
    Command::new("FlightSqlClientDemoApp")
        .about("A Flight Sql client CLI")
        .arg(
            arg!([HOST])
                .help("The host where the Flight Sql server is running")
                .default_value("localhost"),
        )
        .arg(
            arg!([PORT])
                .help("The port where the Flight Sql server is running")
                .default_value("50051")
                .validator(|s| s.parse::<usize>()),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("Execute")
                .about("Execute a SQL query")
                .arg(arg!(<QUERY> "The query to execute"))
                .arg_required_else_help(true),
        )
        .subcommand(Command::new("GetCatalogs").about("Get catalogs"))
        .subcommand(Command::new("GetTableTypes").about("Get table types"))
        .subcommand(
            Command::new("GetSqlInfo")
                .about("Get server sql info values")
                .arg(arg!([IDS]... "The sql info ids to fetch").validator(|s| s.parse::<u32>())),
        )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let host = matches.value_of("HOST").expect("'HOST' is required");

    let port: usize = matches.value_of_t("PORT").expect("'PORT' is required");

    let client = FlightServiceClient::connect(format!("http://{}:{}", host, port)).await?;

    match matches.subcommand() {
        Some(("Execute", sub_matches)) => {
            let query = sub_matches
                .value_of("QUERY")
                .expect("'QUERY' is required")
                .to_string();
            execute_command(client, CommandStatementQuery {
                query,
                ..Default::default()
            })
            .await?;
        }
        Some(("GetCatalogs", _)) => {
            execute_command(client, CommandGetCatalogs {}).await?;
        }
        Some(("GetTableTypes", _)) => {
            execute_command(client, CommandGetTableTypes {}).await?;
        }
        Some(("GetSqlInfo", sub_matches)) => {
            let info: Vec<u32> = sub_matches
                .values_of("IDS")
                .map(|ids| ids.map(|id| id.parse().expect("'IDS' are u32")).collect())
                .unwrap_or_default();
            execute_command(client, CommandGetSqlInfo { info }).await?;
        }
        _ => unreachable!(),
    }

    Ok(())
}

async fn execute_command<M: ProstMessageExt>(
    mut client: FlightServiceClient<Channel>,
    command: M,
) -> Result<(), ClientError> {
    let any = prost_types::Any::pack(&command)?;

    let fi = client
        .get_flight_info(FlightDescriptor {
            r#type: DescriptorType::Cmd as i32,
            cmd: any.encode_to_vec(),
            path: vec![],
        })
        .await?
        .into_inner();

    print_flight_info_results(client, fi).await
}

async fn print_flight_info_results(
    mut client: FlightServiceClient<Channel>,
    fi: FlightInfo,
) -> Result<(), ClientError> {
    let first_endpoint = fi
        .endpoint
        .first()
        .ok_or_else(|| ClientError::Logic("Failed to get first endpoint".to_string()))?;

    let first_ticket = first_endpoint
        .ticket
        .clone()
        .ok_or_else(|| ClientError::Logic("Failed to get first ticket".to_string()))?;

    let mut flight_data_stream = client.do_get(first_ticket).await?.into_inner();

    print_flight_data_stream(&mut flight_data_stream).await
}

async fn print_flight_data_stream(
    flight_data_stream: &mut Streaming<FlightData>,
) -> Result<(), ClientError> {
    let first_message = flight_data_stream
        .message()
        .await?
        .ok_or_else(|| ClientError::Logic("Failed to get schema message".to_string()))?;
    let schema = Arc::new(schema_from_ipc_message(&first_message.data_header)?);

    let mut dictionaries_by_id: HashMap<i64, ArrayRef> = HashMap::new();
    let mut batches: Vec<RecordBatch> = vec![];
    while let Some(flight_data) = flight_data_stream.message().await? {
        let message = root_as_message(&flight_data.data_header[..]).map_err(|err| {
            ClientError::DataError(format!("Unable to get root as message: {:?}", err))
        })?;

        match message.header_type() {
            MessageHeader::DictionaryBatch => {
                let batch = message.header_as_dictionary_batch().ok_or_else(|| {
                    ClientError::DataError("Unable to read dictionary batch header".to_string())
                })?;
                read_dictionary(
                    &Buffer::from(flight_data.data_body),
                    batch,
                    &schema,
                    &mut dictionaries_by_id,
                    &message.version(),
                )?;
            }
            MessageHeader::RecordBatch => {
                let batch = message.header_as_record_batch().ok_or_else(|| {
                    ClientError::DataError("Unable to read record batch header".to_string())
                })?;
                let record = read_record_batch(
                    &Buffer::from(flight_data.data_body),
                    batch,
                    schema.clone(),
                    &dictionaries_by_id,
                    None,
                    &message.version(),
                )?;
                batches.push(record);
            }
            _ => {}
        }
    }

    arrow::util::pretty::print_batches(&batches)?;

    Ok(())
}
