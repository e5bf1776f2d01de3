#[derive(Debug)]
pub enum ServerError {
    TonicTransportError(tonic::transport::Error),
    AddrParseError(std::net::AddrParseError),
    ArrowError(arrow::error::ArrowError),
    TonicStatus(tonic::Status),
    SendError(String),
}

impl From<tonic::transport::Error> for ServerError {
    fn from(error: tonic::transport::Error) -> Self {
        ServerError::TonicTransportError(error)
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(error: std::net::AddrParseError) -> Self {
        ServerError::AddrParseError(error)
    }
}

impl From<arrow::error::ArrowError> for ServerError {
    fn from(error: arrow::error::ArrowError) -> Self {
        ServerError::ArrowError(error)
    }
}

impl From<tonic::Status> for ServerError {
    fn from(error: tonic::Status) -> Self {
        ServerError::TonicStatus(error)
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::TonicTransportError(e) => write!(f, "transport error: {}", e),
            ServerError::AddrParseError(e) => write!(f, "invalid address: {}", e),
            ServerError::ArrowError(e) => write!(f, "arrow error: {}", e),
            ServerError::TonicStatus(e) => write!(f, "status: {}", e),
            ServerError::SendError(e) => write!(f, "send error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

pub fn arrow_error_to_status(err: arrow::error::ArrowError) -> tonic::Status {
    tonic::Status::internal(format!("{:?}", err))
}

pub fn decode_error_to_status(err: prost::DecodeError) -> tonic::Status {
    tonic::Status::invalid_argument(format!("{:?}", err))
}
