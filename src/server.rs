use arrow::datatypes::SchemaRef;
use arrow::ipc::writer::IpcWriteOptions;
use arrow::record_batch::RecordBatch;
use tokio::sync::mpsc;
use tonic::Status;

use crate::arrow_flight_protocol::{FlightDescriptor, FlightEndpoint, FlightInfo, Ticket};
use crate::arrow_flight_protocol_sql::*;
use crate::flight_sql_command::{CrossTableRef, TableRef};
use crate::service::{FlightDataReader, PutMetadataWriter};
use crate::sql_info::{sql_info_schema, SqlInfoRegistry, SqlInfoValue};
use crate::util::ipc_message_from_arrow_schema;

/// Action type advertised for creating a prepared statement.
pub const CREATE_PREPARED_STATEMENT_ACTION_TYPE: &str = "CreatePreparedStatement";
/// Action type advertised for closing a prepared statement.
pub const CLOSE_PREPARED_STATEMENT_ACTION_TYPE: &str = "ClosePreparedStatement";

/// One element of a `DoGet` result stream: a record batch plus optional
/// per-chunk metadata.
///
/// A chunk may carry a `FlightDescriptor`; the streaming adapter keeps it as
/// the current descriptor for this and subsequent batches, which lets a
/// producer partition one result set across logical sub-streams.
#[derive(Debug, Clone)]
pub struct StreamChunk {
    pub data: RecordBatch,
    pub descriptor: Option<FlightDescriptor>,
    pub app_metadata: Vec<u8>,
}

impl StreamChunk {
    pub fn new(data: RecordBatch) -> Self {
        StreamChunk {
            data,
            descriptor: None,
            app_metadata: vec![],
        }
    }
}

/// Receiving half of a `DoGet` producer channel. The channel carries either
/// chunks or a terminal error; the producer closes it (by dropping the
/// sender) when the stream is complete.
pub type StreamChunks = mpsc::Receiver<Result<StreamChunk, Status>>;

/// Result of creating a prepared statement: the server-generated opaque
/// handle, plus the result set and parameter schemas when known.
#[derive(Debug, Clone, Default)]
pub struct CreatePreparedStatementResult {
    pub handle: Vec<u8>,
    pub dataset_schema: Option<SchemaRef>,
    pub parameter_schema: Option<SchemaRef>,
}

/// State shared by every Flight SQL server: the SqlInfo registry backing the
/// default `GetSqlInfo` handling.
///
/// Concrete servers hold a `BaseServer` and return it from
/// [`FlightSqlServer::base`]; that requirement is what keeps the trait
/// extensible, since new defaulted methods cannot break existing
/// implementations.
#[derive(Debug, Default)]
pub struct BaseServer {
    sql_info: SqlInfoRegistry,
}

impl BaseServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value to return for the given SqlInfo id. Values are one
    /// of the six shapes admitted by [`SqlInfoValue`].
    pub fn register_sql_info(&self, id: u32, value: impl Into<SqlInfoValue>) {
        self.sql_info.register(id, value);
    }

    pub fn sql_info(&self) -> &SqlInfoRegistry {
        &self.sql_info
    }

    /// Build the FlightInfo returned for a `GetSqlInfo` request: one
    /// endpoint whose ticket is the original command bytes, with unknown
    /// totals.
    pub fn get_flight_info_sql_info(
        &self,
        _query: CommandGetSqlInfo,
        descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        if self.sql_info.is_empty() {
            return Err(Status::not_found("no sql information available"));
        }

        let options = IpcWriteOptions::default();
        let schema = ipc_message_from_arrow_schema(&sql_info_schema(), &options);
        let ticket = Ticket {
            ticket: descriptor.cmd.clone(),
        };
        Ok(FlightInfo {
            schema,
            flight_descriptor: Some(descriptor),
            endpoint: vec![FlightEndpoint {
                ticket: Some(ticket),
                location: vec![],
            }],
            total_records: -1,
            total_bytes: -1,
        })
    }

    /// Build the single-record stream answering a `GetSqlInfo` ticket.
    pub fn do_get_sql_info(
        &self,
        query: CommandGetSqlInfo,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        let batch = self.sql_info.build_record(&query.info)?;
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(async move {
            let _ = tx.send(Ok(StreamChunk::new(batch))).await;
        });
        Ok((sql_info_schema(), rx))
    }
}

/// The Flight SQL server interface. Every method has a default
/// implementation returning `Unimplemented`, except `GetSqlInfo` handling
/// which is backed by the [`BaseServer`] registry, so concrete servers
/// override only what they support.
///
/// `get_flight_info_*` methods return the `FlightInfo` describing where to
/// retrieve results for a request. `do_get_*` methods return the schema of
/// the result stream together with the receiving half of a chunk channel;
/// the producing half should be driven from a spawned task, since the
/// channel is rendezvous-sized and sends block until the adapter forwards
/// the previous batch to the client. A producer whose `send` fails must
/// stop: the call was cancelled or failed, and the adapter has dropped the
/// receiver.
#[tonic::async_trait]
pub trait FlightSqlServer: Send + Sync + 'static {
    /// Accessor for the embedded [`BaseServer`]. Required of every
    /// implementation.
    fn base(&self) -> &BaseServer;

    /// Return a FlightInfo for executing the given SQL query.
    async fn get_flight_info_statement(
        &self,
        _query: CommandStatementQuery,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented("GetFlightInfoStatement not implemented"))
    }

    /// Return the stream for a statement ticket produced by
    /// `get_flight_info_statement`.
    async fn do_get_statement(
        &self,
        _ticket: TicketStatementQuery,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetStatement not implemented"))
    }

    async fn get_flight_info_prepared_statement(
        &self,
        _query: CommandPreparedStatementQuery,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented(
            "GetFlightInfoPreparedStatement not implemented",
        ))
    }

    async fn do_get_prepared_statement(
        &self,
        _query: CommandPreparedStatementQuery,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetPreparedStatement not implemented"))
    }

    async fn get_flight_info_catalogs(
        &self,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented("GetFlightInfoCatalogs not implemented"))
    }

    async fn do_get_catalogs(&self) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetCatalogs not implemented"))
    }

    async fn get_flight_info_xdbc_type_info(
        &self,
        _query: CommandGetXdbcTypeInfo,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented(
            "GetFlightInfoXdbcTypeInfo not implemented",
        ))
    }

    async fn do_get_xdbc_type_info(
        &self,
        _query: CommandGetXdbcTypeInfo,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetXdbcTypeInfo not implemented"))
    }

    /// Return a FlightInfo for retrieving registered SqlInfo values. Backed
    /// by the base registry; fails `NotFound` when nothing is registered.
    async fn get_flight_info_sql_info(
        &self,
        query: CommandGetSqlInfo,
        descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        self.base().get_flight_info_sql_info(query, descriptor)
    }

    /// Return the stream of registered SqlInfo values for the requested ids.
    async fn do_get_sql_info(
        &self,
        query: CommandGetSqlInfo,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        self.base().do_get_sql_info(query)
    }

    async fn get_flight_info_schemas(
        &self,
        _query: CommandGetDbSchemas,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented("GetFlightInfoSchemas not implemented"))
    }

    async fn do_get_db_schemas(
        &self,
        _query: CommandGetDbSchemas,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetDBSchemas not implemented"))
    }

    async fn get_flight_info_tables(
        &self,
        _query: CommandGetTables,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented("GetFlightInfoTables not implemented"))
    }

    async fn do_get_tables(
        &self,
        _query: CommandGetTables,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetTables not implemented"))
    }

    async fn get_flight_info_table_types(
        &self,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented("GetFlightInfoTableTypes not implemented"))
    }

    async fn do_get_table_types(&self) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetTableTypes not implemented"))
    }

    async fn get_flight_info_primary_keys(
        &self,
        _table: TableRef,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented("GetFlightInfoPrimaryKeys not implemented"))
    }

    async fn do_get_primary_keys(
        &self,
        _table: TableRef,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetPrimaryKeys not implemented"))
    }

    async fn get_flight_info_exported_keys(
        &self,
        _table: TableRef,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented(
            "GetFlightInfoExportedKeys not implemented",
        ))
    }

    async fn do_get_exported_keys(
        &self,
        _table: TableRef,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetExportedKeys not implemented"))
    }

    async fn get_flight_info_imported_keys(
        &self,
        _table: TableRef,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented(
            "GetFlightInfoImportedKeys not implemented",
        ))
    }

    async fn do_get_imported_keys(
        &self,
        _table: TableRef,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetImportedKeys not implemented"))
    }

    async fn get_flight_info_cross_reference(
        &self,
        _tables: CrossTableRef,
        _descriptor: FlightDescriptor,
    ) -> Result<FlightInfo, Status> {
        Err(Status::unimplemented(
            "GetFlightInfoCrossReference not implemented",
        ))
    }

    async fn do_get_cross_reference(
        &self,
        _tables: CrossTableRef,
    ) -> Result<(SchemaRef, StreamChunks), Status> {
        Err(Status::unimplemented("DoGetCrossReference not implemented"))
    }

    /// Execute a SQL update statement, returning the number of affected
    /// rows, or -1 when unknown.
    async fn do_put_statement_update(
        &self,
        _query: CommandStatementUpdate,
    ) -> Result<i64, Status> {
        Err(Status::unimplemented(
            "DoPutCommandStatementUpdate not implemented",
        ))
    }

    /// Bind parameter values to a prepared statement. The reader yields the
    /// uploaded parameter batches; the writer sends application metadata
    /// back to the client.
    async fn do_put_prepared_statement_query(
        &self,
        _query: CommandPreparedStatementQuery,
        _reader: FlightDataReader,
        _writer: PutMetadataWriter,
    ) -> Result<(), Status> {
        Err(Status::unimplemented(
            "DoPutPreparedStatementQuery not implemented",
        ))
    }

    /// Execute a prepared update statement, binding parameters from the
    /// uploaded batches. Returns the number of affected rows, or -1 when
    /// unknown.
    async fn do_put_prepared_statement_update(
        &self,
        _query: CommandPreparedStatementUpdate,
        _reader: FlightDataReader,
    ) -> Result<i64, Status> {
        Err(Status::unimplemented(
            "DoPutPreparedStatementUpdate not implemented",
        ))
    }

    /// Create a prepared statement from a SQL query, returning an opaque
    /// handle for later requests.
    async fn create_prepared_statement(
        &self,
        _request: ActionCreatePreparedStatementRequest,
    ) -> Result<CreatePreparedStatementResult, Status> {
        Err(Status::unimplemented("CreatePreparedStatement not implemented"))
    }

    /// Close the prepared statement identified by the request handle.
    async fn close_prepared_statement(
        &self,
        _request: ActionClosePreparedStatementRequest,
    ) -> Result<(), Status> {
        Err(Status::unimplemented("ClosePreparedStatement not implemented"))
    }
}
