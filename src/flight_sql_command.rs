use crate::arrow_flight_protocol::{FlightDescriptor, Ticket};
use crate::arrow_flight_protocol_sql::*;
use crate::error::{arrow_error_to_status, decode_error_to_status};
use crate::util::{ProstAnyExt, ProstMessageExt};
use prost::Message;
use tonic::Status;

/// A Flight SQL command decoded from the `Any` envelope carried in a
/// `FlightDescriptor.cmd`, a `Ticket.ticket` or an `Action.body`.
///
/// This enum is the single place where the known command set is enumerated;
/// dispatch fails closed on any type URL not listed here.
#[derive(Debug, Clone, PartialEq)]
pub enum FlightSqlCommand {
    StatementQuery(CommandStatementQuery),
    PreparedStatementQuery(CommandPreparedStatementQuery),
    StatementUpdate(CommandStatementUpdate),
    PreparedStatementUpdate(CommandPreparedStatementUpdate),
    GetCatalogs(CommandGetCatalogs),
    GetDbSchemas(CommandGetDbSchemas),
    GetTables(CommandGetTables),
    GetTableTypes(CommandGetTableTypes),
    GetPrimaryKeys(CommandGetPrimaryKeys),
    GetExportedKeys(CommandGetExportedKeys),
    GetImportedKeys(CommandGetImportedKeys),
    GetCrossReference(CommandGetCrossReference),
    GetXdbcTypeInfo(CommandGetXdbcTypeInfo),
    GetSqlInfo(CommandGetSqlInfo),
    TicketStatement(TicketStatementQuery),
}

fn unpack<M: ProstMessageExt>(any: &prost_types::Any) -> Result<M, Status> {
    // callers check `any.is::<M>()` first, so a mismatch cannot happen here
    any.unpack()
        .map_err(arrow_error_to_status)?
        .ok_or_else(|| Status::internal("unexpected message type in Any envelope"))
}

impl FlightSqlCommand {
    fn try_parse_bytes<B: bytes::Buf>(buf: B) -> Result<FlightSqlCommand, Status> {
        let any: prost_types::Any = prost::Message::decode(buf).map_err(decode_error_to_status)?;

        match any {
            _ if any.is::<CommandStatementQuery>() => {
                Ok(FlightSqlCommand::StatementQuery(unpack(&any)?))
            }
            _ if any.is::<CommandPreparedStatementQuery>() => {
                Ok(FlightSqlCommand::PreparedStatementQuery(unpack(&any)?))
            }
            _ if any.is::<CommandStatementUpdate>() => {
                Ok(FlightSqlCommand::StatementUpdate(unpack(&any)?))
            }
            _ if any.is::<CommandPreparedStatementUpdate>() => {
                Ok(FlightSqlCommand::PreparedStatementUpdate(unpack(&any)?))
            }
            _ if any.is::<CommandGetCatalogs>() => {
                Ok(FlightSqlCommand::GetCatalogs(unpack(&any)?))
            }
            _ if any.is::<CommandGetDbSchemas>() => {
                Ok(FlightSqlCommand::GetDbSchemas(unpack(&any)?))
            }
            _ if any.is::<CommandGetTables>() => Ok(FlightSqlCommand::GetTables(unpack(&any)?)),
            _ if any.is::<CommandGetTableTypes>() => {
                Ok(FlightSqlCommand::GetTableTypes(unpack(&any)?))
            }
            _ if any.is::<CommandGetPrimaryKeys>() => {
                Ok(FlightSqlCommand::GetPrimaryKeys(unpack(&any)?))
            }
            _ if any.is::<CommandGetExportedKeys>() => {
                Ok(FlightSqlCommand::GetExportedKeys(unpack(&any)?))
            }
            _ if any.is::<CommandGetImportedKeys>() => {
                Ok(FlightSqlCommand::GetImportedKeys(unpack(&any)?))
            }
            _ if any.is::<CommandGetCrossReference>() => {
                Ok(FlightSqlCommand::GetCrossReference(unpack(&any)?))
            }
            _ if any.is::<CommandGetXdbcTypeInfo>() => {
                Ok(FlightSqlCommand::GetXdbcTypeInfo(unpack(&any)?))
            }
            _ if any.is::<CommandGetSqlInfo>() => Ok(FlightSqlCommand::GetSqlInfo(unpack(&any)?)),
            _ if any.is::<TicketStatementQuery>() => {
                Ok(FlightSqlCommand::TicketStatement(unpack(&any)?))
            }
            _ => Err(Status::invalid_argument(format!(
                "the defined request is invalid: {}",
                any.type_url
            ))),
        }
    }

    pub fn try_parse_ticket(ticket: &Ticket) -> Result<FlightSqlCommand, Status> {
        FlightSqlCommand::try_parse_bytes(&*ticket.ticket)
    }

    pub fn try_parse_flight_descriptor(
        flight_descriptor: &FlightDescriptor,
    ) -> Result<FlightSqlCommand, Status> {
        FlightSqlCommand::try_parse_bytes(&*flight_descriptor.cmd)
    }

    pub fn as_any(&self) -> prost_types::Any {
        match self {
            FlightSqlCommand::StatementQuery(cmd) => cmd.as_any(),
            FlightSqlCommand::PreparedStatementQuery(cmd) => cmd.as_any(),
            FlightSqlCommand::StatementUpdate(cmd) => cmd.as_any(),
            FlightSqlCommand::PreparedStatementUpdate(cmd) => cmd.as_any(),
            FlightSqlCommand::GetCatalogs(cmd) => cmd.as_any(),
            FlightSqlCommand::GetDbSchemas(cmd) => cmd.as_any(),
            FlightSqlCommand::GetTables(cmd) => cmd.as_any(),
            FlightSqlCommand::GetTableTypes(cmd) => cmd.as_any(),
            FlightSqlCommand::GetPrimaryKeys(cmd) => cmd.as_any(),
            FlightSqlCommand::GetExportedKeys(cmd) => cmd.as_any(),
            FlightSqlCommand::GetImportedKeys(cmd) => cmd.as_any(),
            FlightSqlCommand::GetCrossReference(cmd) => cmd.as_any(),
            FlightSqlCommand::GetXdbcTypeInfo(cmd) => cmd.as_any(),
            FlightSqlCommand::GetSqlInfo(cmd) => cmd.as_any(),
            FlightSqlCommand::TicketStatement(cmd) => cmd.as_any(),
        }
    }

    pub fn to_ticket(&self) -> Ticket {
        Ticket {
            ticket: self.as_any().encode_to_vec(),
        }
    }
}

/// A fully qualified table reference. The primary/exported/imported key
/// commands all carry this triple under the same field names; handlers see
/// one shape regardless of which command arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub catalog: Option<String>,
    pub db_schema: Option<String>,
    pub table: String,
}

/// A pair of table references describing a foreign key relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossTableRef {
    pub pk_ref: TableRef,
    pub fk_ref: TableRef,
}

impl From<CommandGetPrimaryKeys> for TableRef {
    fn from(cmd: CommandGetPrimaryKeys) -> Self {
        TableRef {
            catalog: cmd.catalog,
            db_schema: cmd.db_schema,
            table: cmd.table,
        }
    }
}

impl From<CommandGetExportedKeys> for TableRef {
    fn from(cmd: CommandGetExportedKeys) -> Self {
        TableRef {
            catalog: cmd.catalog,
            db_schema: cmd.db_schema,
            table: cmd.table,
        }
    }
}

impl From<CommandGetImportedKeys> for TableRef {
    fn from(cmd: CommandGetImportedKeys) -> Self {
        TableRef {
            catalog: cmd.catalog,
            db_schema: cmd.db_schema,
            table: cmd.table,
        }
    }
}

impl From<CommandGetCrossReference> for CrossTableRef {
    fn from(cmd: CommandGetCrossReference) -> Self {
        CrossTableRef {
            pk_ref: TableRef {
                catalog: cmd.pk_catalog,
                db_schema: cmd.pk_db_schema,
                table: cmd.pk_table,
            },
            fk_ref: TableRef {
                catalog: cmd.fk_catalog,
                db_schema: cmd.fk_db_schema,
                table: cmd.fk_table,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_commands() -> Vec<FlightSqlCommand> {
        vec![
            FlightSqlCommand::StatementQuery(CommandStatementQuery {
                query: "SELECT 1".to_string(),
                ..Default::default()
            }),
            FlightSqlCommand::PreparedStatementQuery(CommandPreparedStatementQuery {
                prepared_statement_handle: vec![1, 2, 3],
            }),
            FlightSqlCommand::StatementUpdate(CommandStatementUpdate {
                query: "DELETE FROM t".to_string(),
                ..Default::default()
            }),
            FlightSqlCommand::PreparedStatementUpdate(CommandPreparedStatementUpdate {
                prepared_statement_handle: vec![4, 5],
            }),
            FlightSqlCommand::GetCatalogs(CommandGetCatalogs {}),
            FlightSqlCommand::GetDbSchemas(CommandGetDbSchemas {
                catalog: Some("cat".to_string()),
                db_schema_filter_pattern: Some("s%".to_string()),
            }),
            FlightSqlCommand::GetTables(CommandGetTables {
                catalog: None,
                db_schema_filter_pattern: None,
                table_name_filter_pattern: Some("t%".to_string()),
                table_types: vec!["TABLE".to_string(), "VIEW".to_string()],
                include_schema: true,
            }),
            FlightSqlCommand::GetTableTypes(CommandGetTableTypes {}),
            FlightSqlCommand::GetPrimaryKeys(CommandGetPrimaryKeys {
                catalog: Some("cat".to_string()),
                db_schema: None,
                table: "t".to_string(),
            }),
            FlightSqlCommand::GetExportedKeys(CommandGetExportedKeys {
                catalog: None,
                db_schema: Some("s".to_string()),
                table: "t".to_string(),
            }),
            FlightSqlCommand::GetImportedKeys(CommandGetImportedKeys {
                catalog: None,
                db_schema: None,
                table: "t".to_string(),
            }),
            FlightSqlCommand::GetCrossReference(CommandGetCrossReference {
                pk_catalog: Some("c1".to_string()),
                pk_db_schema: Some("s1".to_string()),
                pk_table: "parent".to_string(),
                fk_catalog: Some("c2".to_string()),
                fk_db_schema: Some("s2".to_string()),
                fk_table: "child".to_string(),
            }),
            FlightSqlCommand::GetXdbcTypeInfo(CommandGetXdbcTypeInfo {
                data_type: Some(4),
            }),
            FlightSqlCommand::GetSqlInfo(CommandGetSqlInfo { info: vec![1, 2] }),
            FlightSqlCommand::TicketStatement(TicketStatementQuery {
                statement_handle: vec![9, 9],
            }),
        ]
    }

    #[test]
    fn every_command_round_trips_through_a_ticket() {
        for command in all_commands() {
            let ticket = command.to_ticket();
            let parsed = FlightSqlCommand::try_parse_ticket(&ticket).unwrap();
            assert_eq!(parsed, command);
            // re-encoding yields identical bytes
            assert_eq!(parsed.to_ticket().ticket, ticket.ticket);
        }
    }

    #[test]
    fn every_command_round_trips_through_a_descriptor() {
        for command in all_commands() {
            let descriptor = FlightDescriptor {
                r#type: crate::arrow_flight_protocol::flight_descriptor::DescriptorType::Cmd
                    as i32,
                cmd: command.as_any().encode_to_vec(),
                path: vec![],
            };
            let parsed = FlightSqlCommand::try_parse_flight_descriptor(&descriptor).unwrap();
            assert_eq!(parsed, command);
        }
    }

    #[test]
    fn statement_query_and_ticket_statement_are_distinct() {
        let query = FlightSqlCommand::StatementQuery(CommandStatementQuery {
            query: "SELECT 1".to_string(),
            ..Default::default()
        });
        let ticket = FlightSqlCommand::TicketStatement(TicketStatementQuery {
            statement_handle: b"SELECT 1".to_vec(),
        });
        match FlightSqlCommand::try_parse_ticket(&query.to_ticket()).unwrap() {
            FlightSqlCommand::StatementQuery(_) => {}
            other => panic!("expected StatementQuery, got {:?}", other),
        }
        match FlightSqlCommand::try_parse_ticket(&ticket.to_ticket()).unwrap() {
            FlightSqlCommand::TicketStatement(_) => {}
            other => panic!("expected TicketStatement, got {:?}", other),
        }
    }

    #[test]
    fn unknown_type_url_is_invalid_argument() {
        let any = prost_types::Any {
            type_url: "type.googleapis.com/arrow.flight.protocol.sql.NoSuchCommand".to_string(),
            value: vec![],
        };
        let ticket = Ticket {
            ticket: any.encode_to_vec(),
        };
        let err = FlightSqlCommand::try_parse_ticket(&ticket).unwrap_err();
        assert_eq!(err.code(), tonic::Code::InvalidArgument);
        assert!(err.message().contains("NoSuchCommand"));
    }

    #[test]
    fn garbage_bytes_are_invalid_argument() {
        let ticket = Ticket {
            ticket: vec![0xff, 0xff, 0xff],
        };
        let err = FlightSqlCommand::try_parse_ticket(&ticket).unwrap_err();
        assert_eq!(err.code(), tonic::Code::InvalidArgument);
    }

    #[test]
    fn key_commands_normalize_to_table_refs() {
        let pk = CommandGetPrimaryKeys {
            catalog: Some("cat".to_string()),
            db_schema: Some("s".to_string()),
            table: "t".to_string(),
        };
        let table_ref: TableRef = pk.into();
        assert_eq!(table_ref.catalog.as_deref(), Some("cat"));
        assert_eq!(table_ref.db_schema.as_deref(), Some("s"));
        assert_eq!(table_ref.table, "t");

        let cross = CommandGetCrossReference {
            pk_catalog: None,
            pk_db_schema: None,
            pk_table: "parent".to_string(),
            fk_catalog: None,
            fk_db_schema: Some("s2".to_string()),
            fk_table: "child".to_string(),
        };
        let cross_ref: CrossTableRef = cross.into();
        assert_eq!(cross_ref.pk_ref.table, "parent");
        assert_eq!(cross_ref.fk_ref.table, "child");
        assert_eq!(cross_ref.fk_ref.db_schema.as_deref(), Some("s2"));
    }
}
