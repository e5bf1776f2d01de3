use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use arrow::array::{Array, ArrayRef, BooleanArray, Int64Array, StringArray, UInt32Array, UnionArray};
use arrow::buffer::Buffer;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::ipc::reader::read_record_batch;
use arrow::ipc::{root_as_message, MessageHeader};
use arrow::record_batch::RecordBatch;
use prost::Message;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, oneshot};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;
use tonic::Status;

use arrow_flightsql_server::arrow_flight_protocol::flight_descriptor::DescriptorType;
use arrow_flightsql_server::arrow_flight_protocol::flight_service_client::FlightServiceClient;
use arrow_flightsql_server::arrow_flight_protocol::{Action, Empty, FlightData, FlightDescriptor};
use arrow_flightsql_server::arrow_flight_protocol_sql::*;
use arrow_flightsql_server::server::{
    BaseServer, CreatePreparedStatementResult, FlightSqlServer, StreamChunk, StreamChunks,
    CLOSE_PREPARED_STATEMENT_ACTION_TYPE, CREATE_PREPARED_STATEMENT_ACTION_TYPE,
};
use arrow_flightsql_server::service::FlightSqlService;
use arrow_flightsql_server::sql_info::sql_info_schema;
use arrow_flightsql_server::util::{schema_from_ipc_message, ProstAnyExt, ProstMessageExt};

async fn start_server<S: FlightSqlServer>(server: S) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = FlightSqlService::new(server).into_service();
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(service)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr
}

async fn connect(addr: SocketAddr) -> FlightServiceClient<Channel> {
    FlightServiceClient::connect(format!("http://{}", addr))
        .await
        .unwrap()
}

fn cmd_descriptor<M: ProstMessageExt>(command: &M) -> FlightDescriptor {
    FlightDescriptor {
        r#type: DescriptorType::Cmd as i32,
        cmd: command.as_any().encode_to_vec(),
        path: vec![],
    }
}

fn decode_record_batch(schema: SchemaRef, data: &FlightData) -> RecordBatch {
    let message = root_as_message(&data.data_header[..]).unwrap();
    assert_eq!(message.header_type(), MessageHeader::RecordBatch);
    let batch = message.header_as_record_batch().unwrap();
    let dictionaries: HashMap<i64, ArrayRef> = HashMap::new();
    read_record_batch(
        &Buffer::from(data.data_body.clone()),
        batch,
        schema,
        &dictionaries,
        None,
        &message.version(),
    )
    .unwrap()
}

struct SqlInfoOnlyServer {
    base: BaseServer,
}

impl SqlInfoOnlyServer {
    fn new() -> Self {
        Self {
            base: BaseServer::new(),
        }
    }
}

#[tonic::async_trait]
impl FlightSqlServer for SqlInfoOnlyServer {
    fn base(&self) -> &BaseServer {
        &self.base
    }
}

#[tokio::test]
async fn sql_info_round_trip() {
    let server = SqlInfoOnlyServer::new();
    server.base().register_sql_info(1, "v1.0");
    server.base().register_sql_info(2, true);
    let addr = start_server(server).await;
    let mut client = connect(addr).await;

    let descriptor = cmd_descriptor(&CommandGetSqlInfo { info: vec![1, 2] });
    let cmd_bytes = descriptor.cmd.clone();

    let fi = client
        .get_flight_info(descriptor)
        .await
        .unwrap()
        .into_inner();
    assert_eq!(fi.total_records, -1);
    assert_eq!(fi.total_bytes, -1);
    assert_eq!(
        *schema_from_ipc_message(&fi.schema).unwrap().fields(),
        *sql_info_schema().fields()
    );

    // the endpoint ticket is the original command bytes
    let ticket = fi.endpoint[0].ticket.clone().unwrap();
    assert_eq!(ticket.ticket, cmd_bytes);

    let mut stream = client.do_get(ticket).await.unwrap().into_inner();

    let schema_message = stream.message().await.unwrap().unwrap();
    let schema = Arc::new(schema_from_ipc_message(&schema_message.data_header).unwrap());
    assert_eq!(*schema.fields(), *sql_info_schema().fields());

    let batch_message = stream.message().await.unwrap().unwrap();
    let record = decode_record_batch(schema, &batch_message);
    assert!(stream.message().await.unwrap().is_none());

    assert_eq!(record.num_rows(), 2);
    let names = record
        .column(0)
        .as_any()
        .downcast_ref::<UInt32Array>()
        .unwrap();
    assert_eq!(names.values().as_ref(), &[1, 2]);

    let values = record
        .column(1)
        .as_any()
        .downcast_ref::<UnionArray>()
        .unwrap();
    assert_eq!(values.type_id(0), 0);
    assert_eq!(values.type_id(1), 1);
    let strings = values
        .child(0)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();
    assert_eq!(strings.value(0), "v1.0");
    let bools = values
        .child(1)
        .as_any()
        .downcast_ref::<BooleanArray>()
        .unwrap();
    assert!(bools.value(0));
}

#[tokio::test]
async fn sql_info_with_empty_registry_is_not_found() {
    let addr = start_server(SqlInfoOnlyServer::new()).await;
    let mut client = connect(addr).await;

    let err = client
        .get_flight_info(cmd_descriptor(&CommandGetSqlInfo { info: vec![] }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), tonic::Code::NotFound);
    assert_eq!(err.message(), "no sql information available");
}

#[tokio::test]
async fn sql_info_with_unknown_id_is_not_found() {
    let server = SqlInfoOnlyServer::new();
    server.base().register_sql_info(1, "v1.0");
    let addr = start_server(server).await;
    let mut client = connect(addr).await;

    let command = CommandGetSqlInfo { info: vec![1, 99] };
    let ticket = arrow_flightsql_server::arrow_flight_protocol::Ticket {
        ticket: command.as_any().encode_to_vec(),
    };
    let err = client.do_get(ticket).await.unwrap_err();
    assert_eq!(err.code(), tonic::Code::NotFound);
    assert_eq!(err.message(), "no information for sql info number 99");
}

#[tokio::test]
async fn unimplemented_method_names_the_operation() {
    let addr = start_server(SqlInfoOnlyServer::new()).await;
    let mut client = connect(addr).await;

    let err = client
        .get_flight_info(cmd_descriptor(&CommandGetCatalogs {}))
        .await
        .unwrap_err();
    assert_eq!(err.code(), tonic::Code::Unimplemented);
    assert_eq!(err.message(), "GetFlightInfoCatalogs not implemented");

    // a statement query descriptor reaches the statement handler, not the
    // ticket handler sharing the same query shape
    let err = client
        .get_flight_info(cmd_descriptor(&CommandStatementQuery {
            query: "SELECT 1".to_string(),
            ..Default::default()
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), tonic::Code::Unimplemented);
    assert_eq!(err.message(), "GetFlightInfoStatement not implemented");
}

#[tokio::test]
async fn update_and_ticket_commands_are_rejected_by_get_flight_info() {
    let addr = start_server(SqlInfoOnlyServer::new()).await;
    let mut client = connect(addr).await;

    let err = client
        .get_flight_info(cmd_descriptor(&CommandStatementUpdate {
            query: "DELETE FROM t".to_string(),
            ..Default::default()
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), tonic::Code::InvalidArgument);

    let err = client
        .get_flight_info(cmd_descriptor(&TicketStatementQuery {
            statement_handle: vec![1],
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), tonic::Code::InvalidArgument);
}

#[tokio::test]
async fn statement_query_ticket_is_rejected_by_do_get() {
    let addr = start_server(SqlInfoOnlyServer::new()).await;
    let mut client = connect(addr).await;

    let command = CommandStatementQuery {
        query: "SELECT 1".to_string(),
        ..Default::default()
    };
    let ticket = arrow_flightsql_server::arrow_flight_protocol::Ticket {
        ticket: command.as_any().encode_to_vec(),
    };
    let err = client.do_get(ticket).await.unwrap_err();
    assert_eq!(err.code(), tonic::Code::InvalidArgument);
}

struct UpdateServer {
    base: BaseServer,
}

impl UpdateServer {
    fn new() -> Self {
        Self {
            base: BaseServer::new(),
        }
    }
}

#[tonic::async_trait]
impl FlightSqlServer for UpdateServer {
    fn base(&self) -> &BaseServer {
        &self.base
    }

    async fn do_put_statement_update(&self, query: CommandStatementUpdate) -> Result<i64, Status> {
        assert_eq!(query.query, "DELETE FROM t");
        Ok(7)
    }
}

#[tokio::test]
async fn statement_update_replies_with_record_count() {
    let addr = start_server(UpdateServer::new()).await;
    let mut client = connect(addr).await;

    let descriptor = cmd_descriptor(&CommandStatementUpdate {
        query: "DELETE FROM t".to_string(),
        ..Default::default()
    });
    let first = FlightData {
        flight_descriptor: Some(descriptor),
        ..Default::default()
    };

    let mut results = client
        .do_put(tokio_stream::iter(vec![first]))
        .await
        .unwrap()
        .into_inner();
    let put_result = results.message().await.unwrap().unwrap();
    assert!(results.message().await.unwrap().is_none());

    let update_result = DoPutUpdateResult::decode(&*put_result.app_metadata).unwrap();
    assert_eq!(update_result.record_count, 7);
}

struct PreparedServer {
    base: BaseServer,
    closed_handles: Mutex<Vec<Vec<u8>>>,
}

impl PreparedServer {
    fn new() -> Self {
        Self {
            base: BaseServer::new(),
            closed_handles: Mutex::new(vec![]),
        }
    }

    fn parameter_schema() -> SchemaRef {
        Arc::new(Schema::new(vec![Field::new(
            "parameter_1",
            DataType::Int32,
            false,
        )]))
    }
}

#[tonic::async_trait]
impl FlightSqlServer for PreparedServer {
    fn base(&self) -> &BaseServer {
        &self.base
    }

    async fn create_prepared_statement(
        &self,
        request: ActionCreatePreparedStatementRequest,
    ) -> Result<CreatePreparedStatementResult, Status> {
        assert_eq!(request.query, "SELECT ?");
        Ok(CreatePreparedStatementResult {
            handle: vec![0xab],
            dataset_schema: None,
            parameter_schema: Some(Self::parameter_schema()),
        })
    }

    async fn close_prepared_statement(
        &self,
        request: ActionClosePreparedStatementRequest,
    ) -> Result<(), Status> {
        self.closed_handles
            .lock()
            .unwrap()
            .push(request.prepared_statement_handle);
        Ok(())
    }
}

#[tokio::test]
async fn create_prepared_statement_round_trip() {
    let addr = start_server(PreparedServer::new()).await;
    let mut client = connect(addr).await;

    let request = ActionCreatePreparedStatementRequest {
        query: "SELECT ?".to_string(),
        ..Default::default()
    };
    let action = Action {
        r#type: CREATE_PREPARED_STATEMENT_ACTION_TYPE.to_string(),
        body: request.as_any().encode_to_vec(),
    };

    let mut results = client.do_action(action).await.unwrap().into_inner();
    let result = results.message().await.unwrap().unwrap();
    assert!(results.message().await.unwrap().is_none());

    let any: prost_types::Any = Message::decode(&*result.body).unwrap();
    let created: ActionCreatePreparedStatementResult = any.unpack().unwrap().unwrap();
    assert_eq!(created.prepared_statement_handle, vec![0xab]);
    assert!(created.dataset_schema.is_empty());
    let parameter_schema = schema_from_ipc_message(&created.parameter_schema).unwrap();
    assert_eq!(
        *parameter_schema.fields(),
        *PreparedServer::parameter_schema().fields()
    );
}

#[tokio::test]
async fn close_prepared_statement_replies_with_empty_result() {
    let server = Arc::new(PreparedServer::new());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = FlightSqlService::from_arc(server.clone()).into_service();
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(service)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    let mut client = connect(addr).await;

    let request = ActionClosePreparedStatementRequest {
        prepared_statement_handle: vec![0xab],
    };
    let action = Action {
        r#type: CLOSE_PREPARED_STATEMENT_ACTION_TYPE.to_string(),
        body: request.as_any().encode_to_vec(),
    };

    let mut results = client.do_action(action).await.unwrap().into_inner();
    let result = results.message().await.unwrap().unwrap();
    assert!(result.body.is_empty());
    assert!(results.message().await.unwrap().is_none());

    assert_eq!(*server.closed_handles.lock().unwrap(), vec![vec![0xab]]);
}

#[tokio::test]
async fn unknown_action_type_is_invalid_argument() {
    let addr = start_server(SqlInfoOnlyServer::new()).await;
    let mut client = connect(addr).await;

    let err = client
        .do_action(Action {
            r#type: "BeginTransaction".to_string(),
            body: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), tonic::Code::InvalidArgument);
}

#[tokio::test]
async fn list_actions_advertises_the_prepared_statement_actions() {
    let addr = start_server(SqlInfoOnlyServer::new()).await;
    let mut client = connect(addr).await;

    let mut stream = client.list_actions(Empty {}).await.unwrap().into_inner();
    let mut types = vec![];
    while let Some(action_type) = stream.message().await.unwrap() {
        types.push(action_type.r#type);
    }
    assert_eq!(
        types,
        vec![
            CREATE_PREPARED_STATEMENT_ACTION_TYPE.to_string(),
            CLOSE_PREPARED_STATEMENT_ACTION_TYPE.to_string(),
        ]
    );
}

struct StreamingServer {
    base: BaseServer,
    cancelled: Mutex<Option<oneshot::Sender<()>>>,
}

impl StreamingServer {
    fn new(cancelled: oneshot::Sender<()>) -> Self {
        Self {
            base: BaseServer::new(),
            cancelled: Mutex::new(Some(cancelled)),
        }
    }

    fn schema() -> SchemaRef {
        Arc::new(Schema::new(vec![Field::new(
            "value",
            DataType::Int64,
            false,
        )]))
    }

    fn batch(rows: i64) -> RecordBatch {
        let values = Int64Array::from_iter_values(0..rows);
        RecordBatch::try_new(Self::schema(), vec![Arc::new(values) as _]).unwrap()
    }
}

#[tonic::async_trait]
impl FlightSqlServer for StreamingServer {
    fn base(&self) -> &BaseServer {
        &self.base
    }

    async fn do_get_statement(
        &self,
        _ticket: TicketStatementQuery,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        let cancelled = self.cancelled.lock().unwrap().take();
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(async move {
            loop {
                let chunk = StreamChunk::new(Self::batch(1024));
                if tx.send(Ok(chunk)).await.is_err() {
                    break;
                }
            }
            if let Some(sender) = cancelled {
                let _ = sender.send(());
            }
        });
        Ok((Self::schema(), rx))
    }
}

#[tokio::test]
async fn cancellation_reaches_the_producer() {
    let (cancelled_tx, cancelled_rx) = oneshot::channel();
    let addr = start_server(StreamingServer::new(cancelled_tx)).await;
    let mut client = connect(addr).await;

    let command = TicketStatementQuery {
        statement_handle: vec![1, 2, 3],
    };
    let ticket = arrow_flightsql_server::arrow_flight_protocol::Ticket {
        ticket: command.as_any().encode_to_vec(),
    };
    let mut stream = client.do_get(ticket).await.unwrap().into_inner();

    let schema_message = stream.message().await.unwrap().unwrap();
    let schema = Arc::new(schema_from_ipc_message(&schema_message.data_header).unwrap());

    let batch_message = stream.message().await.unwrap().unwrap();
    let record = decode_record_batch(schema, &batch_message);
    assert_eq!(record.num_rows(), 1024);

    // hang up mid-stream; the producer task must observe the cancellation
    drop(stream);

    tokio::time::timeout(Duration::from_secs(10), cancelled_rx)
        .await
        .expect("producer did not observe cancellation")
        .expect("producer dropped the cancellation sender");
}

struct OrderedServer {
    base: BaseServer,
}

#[tonic::async_trait]
impl FlightSqlServer for OrderedServer {
    fn base(&self) -> &BaseServer {
        &self.base
    }

    async fn do_get_statement(
        &self,
        _ticket: TicketStatementQuery,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        let schema = StreamingServer::schema();
        let (tx, rx) = mpsc::channel(1);
        let producer_schema = schema.clone();
        tokio::spawn(async move {
            for rows in 1..=5 {
                let values = Int64Array::from_iter_values(0..rows);
                let batch =
                    RecordBatch::try_new(producer_schema.clone(), vec![Arc::new(values) as _])
                        .unwrap();
                let mut chunk = StreamChunk::new(batch);
                chunk.app_metadata = vec![rows as u8];
                if tx.send(Ok(chunk)).await.is_err() {
                    return;
                }
            }
        });
        Ok((schema, rx))
    }
}

#[tokio::test]
async fn batches_arrive_in_producer_order_with_app_metadata() {
    let addr = start_server(OrderedServer {
        base: BaseServer::new(),
    })
    .await;
    let mut client = connect(addr).await;

    let command = TicketStatementQuery {
        statement_handle: vec![],
    };
    let ticket = arrow_flightsql_server::arrow_flight_protocol::Ticket {
        ticket: command.as_any().encode_to_vec(),
    };
    let mut stream = client.do_get(ticket).await.unwrap().into_inner();

    let schema_message = stream.message().await.unwrap().unwrap();
    let schema = Arc::new(schema_from_ipc_message(&schema_message.data_header).unwrap());

    let mut seen = vec![];
    while let Some(data) = stream.message().await.unwrap() {
        let record = decode_record_batch(schema.clone(), &data);
        seen.push((record.num_rows(), data.app_metadata.clone()));
    }
    assert_eq!(
        seen,
        vec![
            (1, vec![1]),
            (2, vec![2]),
            (3, vec![3]),
            (4, vec![4]),
            (5, vec![5]),
        ]
    );
}

struct ChunkErrorServer {
    base: BaseServer,
}

#[tonic::async_trait]
impl FlightSqlServer for ChunkErrorServer {
    fn base(&self) -> &BaseServer {
        &self.base
    }

    async fn do_get_statement(
        &self,
        _ticket: TicketStatementQuery,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        let schema = StreamingServer::schema();
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(async move {
            let _ = tx.send(Ok(StreamChunk::new(StreamingServer::batch(2)))).await;
            let _ = tx
                .send(Err(Status::resource_exhausted("backend gave up")))
                .await;
        });
        Ok((schema, rx))
    }
}

#[tokio::test]
async fn chunk_error_terminates_the_stream_with_that_error() {
    let addr = start_server(ChunkErrorServer {
        base: BaseServer::new(),
    })
    .await;
    let mut client = connect(addr).await;

    let command = TicketStatementQuery {
        statement_handle: vec![],
    };
    let ticket = arrow_flightsql_server::arrow_flight_protocol::Ticket {
        ticket: command.as_any().encode_to_vec(),
    };
    let mut stream = client.do_get(ticket).await.unwrap().into_inner();

    // schema, then the one good batch
    stream.message().await.unwrap().unwrap();
    stream.message().await.unwrap().unwrap();

    let err = loop {
        match stream.message().await {
            Ok(Some(_)) => continue,
            Ok(None) => panic!("stream ended without surfacing the chunk error"),
            Err(err) => break err,
        }
    };
    assert_eq!(err.code(), tonic::Code::ResourceExhausted);
    assert_eq!(err.message(), "backend gave up");
}
