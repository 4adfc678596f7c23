/// Review state of a custom-artwork request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A shopper asking for a commissioned artwork.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub description: String,
    pub status: RequestStatus,
}

#[derive(Debug, Clone)]
pub struct CustomRequestCreate {
    pub name: String,
    pub email: String,
    pub description: String,
}
