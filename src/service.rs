use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::buffer::Buffer;
use arrow::datatypes::SchemaRef;
use arrow::ipc::reader::{read_dictionary, read_record_batch};
use arrow::ipc::writer::{DictionaryTracker, IpcDataGenerator, IpcWriteOptions};
use arrow::ipc::{convert, root_as_message, MessageHeader};
use arrow::record_batch::RecordBatch;
use prost::Message;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status, Streaming};

use crate::arrow_flight_protocol::flight_service_server::{FlightService, FlightServiceServer};
use crate::arrow_flight_protocol::{
    Action, ActionType, Criteria, Empty, FlightData, FlightDescriptor, FlightInfo,
    HandshakeRequest, HandshakeResponse, PutResult, Result as ActionResult, SchemaResult, Ticket,
};
use crate::arrow_flight_protocol_sql::*;
use crate::error::{arrow_error_to_status, decode_error_to_status};
use crate::flight_sql_command::FlightSqlCommand;
use crate::server::{
    FlightSqlServer, StreamChunk, StreamChunks, CLOSE_PREPARED_STATEMENT_ACTION_TYPE,
    CREATE_PREPARED_STATEMENT_ACTION_TYPE,
};
use crate::util::{ProstAnyExt, ProstMessageExt, SchemaAsIpc};

/// Routes the four Flight verbs onto a [`FlightSqlServer`], decoding the
/// command envelope carried in descriptors, tickets and action bodies.
pub struct FlightSqlService<S: FlightSqlServer> {
    server: Arc<S>,
}

impl<S: FlightSqlServer> FlightSqlService<S> {
    pub fn new(server: S) -> Self {
        Self {
            server: Arc::new(server),
        }
    }

    pub fn from_arc(server: Arc<S>) -> Self {
        Self { server }
    }

    /// Wrap this service for registration with a tonic server builder.
    pub fn into_service(self) -> FlightServiceServer<Self> {
        FlightServiceServer::new(self)
    }
}

/// Reads record batches uploaded through a `DoPut` stream.
///
/// The schema is read lazily from the stream itself, so a descriptor-only
/// first message (the usual shape for plain update statements) is accepted.
pub struct FlightDataReader {
    stream: Streaming<FlightData>,
    pending: Option<FlightData>,
    descriptor: Option<FlightDescriptor>,
    schema: Option<SchemaRef>,
    dictionaries_by_id: HashMap<i64, ArrayRef>,
    app_metadata: Vec<u8>,
}

impl FlightDataReader {
    pub(crate) fn new(first: FlightData, stream: Streaming<FlightData>) -> Self {
        Self {
            stream,
            descriptor: first.flight_descriptor.clone(),
            pending: Some(first),
            schema: None,
            dictionaries_by_id: HashMap::new(),
            app_metadata: vec![],
        }
    }

    /// The most recent flight descriptor seen on the stream.
    pub fn descriptor(&self) -> Option<&FlightDescriptor> {
        self.descriptor.as_ref()
    }

    /// The stream schema, once a schema message has been read.
    pub fn schema(&self) -> Option<SchemaRef> {
        self.schema.clone()
    }

    /// Application metadata attached to the most recent message.
    pub fn app_metadata(&self) -> &[u8] {
        &self.app_metadata
    }

    /// Read the next record batch, or `None` when the client has finished
    /// the upload. Schema and dictionary messages are consumed internally.
    pub async fn next(&mut self) -> Result<Option<RecordBatch>, Status> {
        loop {
            let data = match self.pending.take() {
                Some(data) => data,
                None => match self.stream.message().await? {
                    Some(data) => data,
                    None => return Ok(None),
                },
            };
            if let Some(batch) = self.process_message(data)? {
                return Ok(Some(batch));
            }
        }
    }

    fn process_message(&mut self, data: FlightData) -> Result<Option<RecordBatch>, Status> {
        let FlightData {
            flight_descriptor,
            data_header,
            app_metadata,
            data_body,
        } = data;
        if let Some(descriptor) = flight_descriptor {
            self.descriptor = Some(descriptor);
        }
        if !app_metadata.is_empty() {
            self.app_metadata = app_metadata;
        }
        if data_header.is_empty() {
            return Ok(None);
        }

        let message = root_as_message(&data_header[..]).map_err(|err| {
            Status::invalid_argument(format!("unable to parse ipc message: {:?}", err))
        })?;
        match message.header_type() {
            MessageHeader::Schema => {
                let ipc_schema = message
                    .header_as_schema()
                    .ok_or_else(|| Status::invalid_argument("unable to read ipc schema"))?;
                self.schema = Some(Arc::new(convert::fb_to_schema(ipc_schema)));
                Ok(None)
            }
            MessageHeader::DictionaryBatch => {
                let schema = self.schema.clone().ok_or_else(|| {
                    Status::invalid_argument("dictionary batch received before schema")
                })?;
                let batch = message.header_as_dictionary_batch().ok_or_else(|| {
                    Status::invalid_argument("unable to read ipc dictionary batch")
                })?;
                read_dictionary(
                    &Buffer::from(data_body),
                    batch,
                    &schema,
                    &mut self.dictionaries_by_id,
                    &message.version(),
                )
                .map_err(arrow_error_to_status)?;
                Ok(None)
            }
            MessageHeader::RecordBatch => {
                let schema = self.schema.clone().ok_or_else(|| {
                    Status::invalid_argument("record batch received before schema")
                })?;
                let batch = message
                    .header_as_record_batch()
                    .ok_or_else(|| Status::invalid_argument("unable to read ipc record batch"))?;
                let record = read_record_batch(
                    &Buffer::from(data_body),
                    batch,
                    schema,
                    &self.dictionaries_by_id,
                    None,
                    &message.version(),
                )
                .map_err(arrow_error_to_status)?;
                Ok(Some(record))
            }
            other => Err(Status::invalid_argument(format!(
                "unexpected ipc message type: {:?}",
                other
            ))),
        }
    }
}

/// Sends application metadata replies on a `DoPut` response stream.
pub struct PutMetadataWriter {
    tx: mpsc::Sender<Result<PutResult, Status>>,
}

impl PutMetadataWriter {
    pub(crate) fn new(tx: mpsc::Sender<Result<PutResult, Status>>) -> Self {
        Self { tx }
    }

    pub async fn write_metadata(&self, app_metadata: Vec<u8>) -> Result<(), Status> {
        self.tx
            .send(Ok(PutResult { app_metadata }))
            .await
            .map_err(|_| Status::cancelled("put result stream closed"))
    }
}

/// Drives a handler chunk channel onto a `DoGet` response channel.
///
/// Every chunk's batch is encoded and released in the same iteration; when
/// the client goes away the send fails and returning from here drops the
/// chunk receiver, which is how the producer observes the cancellation.
async fn stream_record_batches(
    schema: SchemaRef,
    mut chunks: StreamChunks,
    tx: mpsc::Sender<Result<FlightData, Status>>,
) {
    let options = IpcWriteOptions::default();
    let data_gen = IpcDataGenerator::default();
    let mut dictionary_tracker = DictionaryTracker::new(false);

    let schema_message: FlightData = SchemaAsIpc::new(schema.as_ref(), &options).into();
    if tx.send(Ok(schema_message)).await.is_err() {
        return;
    }

    let mut current_descriptor: Option<FlightDescriptor> = None;
    while let Some(next) = chunks.recv().await {
        let StreamChunk {
            data,
            descriptor,
            app_metadata,
        } = match next {
            Ok(chunk) => chunk,
            Err(status) => {
                let _ = tx.send(Err(status)).await;
                return;
            }
        };
        if descriptor.is_some() {
            current_descriptor = descriptor;
        }

        let (dictionaries, batch_message) =
            match data_gen.encoded_batch(&data, &mut dictionary_tracker, &options) {
                Ok(encoded) => encoded,
                Err(err) => {
                    let _ = tx.send(Err(arrow_error_to_status(err))).await;
                    return;
                }
            };
        for encoded in dictionaries {
            let flight_data: FlightData = encoded.into();
            if tx.send(Ok(flight_data)).await.is_err() {
                return;
            }
        }
        let mut flight_data: FlightData = batch_message.into();
        flight_data.flight_descriptor = current_descriptor.clone();
        flight_data.app_metadata = app_metadata;
        if tx.send(Ok(flight_data)).await.is_err() {
            return;
        }
        // `data` is dropped here: the chunk's batch reference is released
        // once its encoding is on the wire, error paths included.
        drop(data);
    }
}

#[tonic::async_trait]
impl<S: FlightSqlServer> FlightService for FlightSqlService<S> {
    type HandshakeStream = ReceiverStream<Result<HandshakeResponse, Status>>;

    async fn handshake(
        &self,
        _request: Request<Streaming<HandshakeRequest>>,
    ) -> Result<Response<Self::HandshakeStream>, Status> {
        Err(Status::unimplemented("Handshake not implemented"))
    }

    type ListFlightsStream = ReceiverStream<Result<FlightInfo, Status>>;

    async fn list_flights(
        &self,
        _request: Request<Criteria>,
    ) -> Result<Response<Self::ListFlightsStream>, Status> {
        Err(Status::unimplemented("ListFlights not implemented"))
    }

    async fn get_flight_info(
        &self,
        request: Request<FlightDescriptor>,
    ) -> Result<Response<FlightInfo>, Status> {
        let descriptor = request.into_inner();
        let command = FlightSqlCommand::try_parse_flight_descriptor(&descriptor)?;
        log::debug!("get_flight_info: {:?}", command.as_any().type_url);

        let info = match command {
            FlightSqlCommand::StatementQuery(cmd) => {
                self.server.get_flight_info_statement(cmd, descriptor).await?
            }
            FlightSqlCommand::PreparedStatementQuery(cmd) => {
                self.server
                    .get_flight_info_prepared_statement(cmd, descriptor)
                    .await?
            }
            FlightSqlCommand::GetCatalogs(_) => {
                self.server.get_flight_info_catalogs(descriptor).await?
            }
            FlightSqlCommand::GetDbSchemas(cmd) => {
                self.server.get_flight_info_schemas(cmd, descriptor).await?
            }
            FlightSqlCommand::GetTables(cmd) => {
                self.server.get_flight_info_tables(cmd, descriptor).await?
            }
            FlightSqlCommand::GetTableTypes(_) => {
                self.server.get_flight_info_table_types(descriptor).await?
            }
            FlightSqlCommand::GetXdbcTypeInfo(cmd) => {
                self.server
                    .get_flight_info_xdbc_type_info(cmd, descriptor)
                    .await?
            }
            FlightSqlCommand::GetSqlInfo(cmd) => {
                self.server.get_flight_info_sql_info(cmd, descriptor).await?
            }
            FlightSqlCommand::GetPrimaryKeys(cmd) => {
                self.server
                    .get_flight_info_primary_keys(cmd.into(), descriptor)
                    .await?
            }
            FlightSqlCommand::GetExportedKeys(cmd) => {
                self.server
                    .get_flight_info_exported_keys(cmd.into(), descriptor)
                    .await?
            }
            FlightSqlCommand::GetImportedKeys(cmd) => {
                self.server
                    .get_flight_info_imported_keys(cmd.into(), descriptor)
                    .await?
            }
            FlightSqlCommand::GetCrossReference(cmd) => {
                self.server
                    .get_flight_info_cross_reference(cmd.into(), descriptor)
                    .await?
            }
            FlightSqlCommand::StatementUpdate(_)
            | FlightSqlCommand::PreparedStatementUpdate(_)
            | FlightSqlCommand::TicketStatement(_) => {
                return Err(Status::invalid_argument("the defined request is invalid"));
            }
        };
        Ok(Response::new(info))
    }

    async fn get_schema(
        &self,
        _request: Request<FlightDescriptor>,
    ) -> Result<Response<SchemaResult>, Status> {
        Err(Status::unimplemented("GetSchema not implemented"))
    }

    type DoGetStream = ReceiverStream<Result<FlightData, Status>>;

    async fn do_get(&self, request: Request<Ticket>) -> Result<Response<Self::DoGetStream>, Status> {
        let ticket = request.into_inner();
        let command = FlightSqlCommand::try_parse_ticket(&ticket)?;
        log::debug!("do_get: {:?}", command.as_any().type_url);

        let (schema, chunks) = match command {
            FlightSqlCommand::TicketStatement(cmd) => self.server.do_get_statement(cmd).await?,
            FlightSqlCommand::PreparedStatementQuery(cmd) => {
                self.server.do_get_prepared_statement(cmd).await?
            }
            FlightSqlCommand::GetCatalogs(_) => self.server.do_get_catalogs().await?,
            FlightSqlCommand::GetDbSchemas(cmd) => self.server.do_get_db_schemas(cmd).await?,
            FlightSqlCommand::GetTables(cmd) => self.server.do_get_tables(cmd).await?,
            FlightSqlCommand::GetTableTypes(_) => self.server.do_get_table_types().await?,
            FlightSqlCommand::GetXdbcTypeInfo(cmd) => {
                self.server.do_get_xdbc_type_info(cmd).await?
            }
            FlightSqlCommand::GetSqlInfo(cmd) => self.server.do_get_sql_info(cmd).await?,
            FlightSqlCommand::GetPrimaryKeys(cmd) => {
                self.server.do_get_primary_keys(cmd.into()).await?
            }
            FlightSqlCommand::GetExportedKeys(cmd) => {
                self.server.do_get_exported_keys(cmd.into()).await?
            }
            FlightSqlCommand::GetImportedKeys(cmd) => {
                self.server.do_get_imported_keys(cmd.into()).await?
            }
            FlightSqlCommand::GetCrossReference(cmd) => {
                self.server.do_get_cross_reference(cmd.into()).await?
            }
            FlightSqlCommand::StatementQuery(_)
            | FlightSqlCommand::StatementUpdate(_)
            | FlightSqlCommand::PreparedStatementUpdate(_) => {
                return Err(Status::invalid_argument("the defined request is invalid"));
            }
        };

        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(stream_record_batches(schema, chunks, tx));
        Ok(Response::new(ReceiverStream::new(rx)))
    }

    type DoPutStream = ReceiverStream<Result<PutResult, Status>>;

    async fn do_put(
        &self,
        request: Request<Streaming<FlightData>>,
    ) -> Result<Response<Self::DoPutStream>, Status> {
        let mut stream = request.into_inner();
        let first = stream
            .message()
            .await?
            .ok_or_else(|| Status::invalid_argument("DoPut stream was empty"))?;
        // the descriptor comes with the first message
        let descriptor = first
            .flight_descriptor
            .clone()
            .ok_or_else(|| Status::invalid_argument("no flight descriptor on first DoPut message"))?;
        let command = FlightSqlCommand::try_parse_flight_descriptor(&descriptor)?;
        log::debug!("do_put: {:?}", command.as_any().type_url);

        match command {
            FlightSqlCommand::StatementUpdate(cmd) => {
                let record_count = self.server.do_put_statement_update(cmd).await?;
                let result = DoPutUpdateResult { record_count };
                let (tx, rx) = mpsc::channel(1);
                tx.send(Ok(PutResult {
                    app_metadata: result.encode_to_vec(),
                }))
                .await
                .map_err(|_| Status::internal("failed to queue put result"))?;
                Ok(Response::new(ReceiverStream::new(rx)))
            }
            FlightSqlCommand::PreparedStatementUpdate(cmd) => {
                let reader = FlightDataReader::new(first, stream);
                let record_count = self
                    .server
                    .do_put_prepared_statement_update(cmd, reader)
                    .await?;
                let result = DoPutUpdateResult { record_count };
                let (tx, rx) = mpsc::channel(1);
                tx.send(Ok(PutResult {
                    app_metadata: result.encode_to_vec(),
                }))
                .await
                .map_err(|_| Status::internal("failed to queue put result"))?;
                Ok(Response::new(ReceiverStream::new(rx)))
            }
            FlightSqlCommand::PreparedStatementQuery(cmd) => {
                let reader = FlightDataReader::new(first, stream);
                let (tx, rx) = mpsc::channel(100);
                let writer = PutMetadataWriter::new(tx.clone());
                let server = self.server.clone();
                tokio::spawn(async move {
                    if let Err(status) = server
                        .do_put_prepared_statement_query(cmd, reader, writer)
                        .await
                    {
                        let _ = tx.send(Err(status)).await;
                    }
                });
                Ok(Response::new(ReceiverStream::new(rx)))
            }
            _ => Err(Status::invalid_argument("the defined request is invalid")),
        }
    }

    type DoExchangeStream = ReceiverStream<Result<FlightData, Status>>;

    async fn do_exchange(
        &self,
        _request: Request<Streaming<FlightData>>,
    ) -> Result<Response<Self::DoExchangeStream>, Status> {
        Err(Status::unimplemented("DoExchange not implemented"))
    }

    type DoActionStream = ReceiverStream<Result<ActionResult, Status>>;

    async fn do_action(
        &self,
        request: Request<Action>,
    ) -> Result<Response<Self::DoActionStream>, Status> {
        let action = request.into_inner();
        log::debug!("do_action: {}", action.r#type);

        match action.r#type.as_str() {
            CREATE_PREPARED_STATEMENT_ACTION_TYPE => {
                let any: prost_types::Any =
                    Message::decode(&*action.body).map_err(decode_error_to_status)?;
                let request: ActionCreatePreparedStatementRequest = any
                    .unpack()
                    .map_err(arrow_error_to_status)?
                    .ok_or_else(|| {
                        Status::invalid_argument(format!(
                            "unexpected message in action body: {}",
                            any.type_url
                        ))
                    })?;

                let output = self.server.create_prepared_statement(request).await?;

                let options = IpcWriteOptions::default();
                let mut result = ActionCreatePreparedStatementResult {
                    prepared_statement_handle: output.handle,
                    ..Default::default()
                };
                if let Some(schema) = output.dataset_schema {
                    result.dataset_schema =
                        crate::util::ipc_message_from_arrow_schema(&schema, &options);
                }
                if let Some(schema) = output.parameter_schema {
                    result.parameter_schema =
                        crate::util::ipc_message_from_arrow_schema(&schema, &options);
                }

                let body = result.as_any().encode_to_vec();
                let (tx, rx) = mpsc::channel(1);
                tx.send(Ok(ActionResult { body }))
                    .await
                    .map_err(|_| Status::internal("failed to queue action result"))?;
                Ok(Response::new(ReceiverStream::new(rx)))
            }
            CLOSE_PREPARED_STATEMENT_ACTION_TYPE => {
                let any: prost_types::Any =
                    Message::decode(&*action.body).map_err(decode_error_to_status)?;
                let request: ActionClosePreparedStatementRequest = any
                    .unpack()
                    .map_err(arrow_error_to_status)?
                    .ok_or_else(|| {
                        Status::invalid_argument(format!(
                            "unexpected message in action body: {}",
                            any.type_url
                        ))
                    })?;

                self.server.close_prepared_statement(request).await?;

                let (tx, rx) = mpsc::channel(1);
                tx.send(Ok(ActionResult::default()))
                    .await
                    .map_err(|_| Status::internal("failed to queue action result"))?;
                Ok(Response::new(ReceiverStream::new(rx)))
            }
            other => Err(Status::invalid_argument(format!(
                "the defined request is invalid: {}",
                other
            ))),
        }
    }

    type ListActionsStream = ReceiverStream<Result<ActionType, Status>>;

    async fn list_actions(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<Self::ListActionsStream>, Status> {
        let actions = [
            (
                CREATE_PREPARED_STATEMENT_ACTION_TYPE,
                "Creates a reusable prepared statement resource on the server.",
            ),
            (
                CLOSE_PREPARED_STATEMENT_ACTION_TYPE,
                "Closes a reusable prepared statement resource on the server.",
            ),
        ];
        let (tx, rx) = mpsc::channel(actions.len());
        for (action_type, description) in actions {
            tx.send(Ok(ActionType {
                r#type: action_type.to_string(),
                description: description.to_string(),
            }))
            .await
            .map_err(|_| Status::internal("failed to queue action type"))?;
        }
        Ok(Response::new(ReceiverStream::new(rx)))
    }
}
