use super::actions::RequestAction;
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{CustomRequest, CustomRequestCreate, RequestStatus};

fn required(field: &str, value: &str) -> Result<String, FrameworkError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FrameworkError::Validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

impl Entity for CustomRequest {
    type Id = String;
    type CreateParams = CustomRequestCreate;
    type Patch = ();
    type Action = RequestAction;
    type ActionResult = RequestStatus;

    fn from_create_params(id: String, params: CustomRequestCreate) -> Result<Self, FrameworkError> {
        let email = required("email", &params.email)?;
        if !email.contains('@') {
            return Err(FrameworkError::Validation(format!("invalid email: {email}")));
        }
        Ok(Self {
            id,
            name: required("name", &params.name)?,
            email,
            description: required("description", &params.description)?,
            status: RequestStatus::Pending,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), FrameworkError> {
        Ok(())
    }

    fn handle_action(&mut self, action: RequestAction) -> Result<RequestStatus, FrameworkError> {
        if self.status != RequestStatus::Pending {
            return Err(FrameworkError::Validation(format!(
                "request {} is already {}",
                self.id, self.status
            )));
        }
        self.status = match action {
            RequestAction::Approve => RequestStatus::Approved,
            RequestAction::Reject => RequestStatus::Rejected,
        };
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(email: &str) -> CustomRequestCreate {
        CustomRequestCreate {
            name: "Mira".into(),
            email: email.into(),
            description: "A portrait of my cat in gouache".into(),
        }
    }

    #[test]
    fn test_request_requires_contact_email() {
        assert!(CustomRequest::from_create_params("request_1".into(), params("")).is_err());
        assert!(CustomRequest::from_create_params("request_1".into(), params("not-an-email")).is_err());
        let request = CustomRequest::from_create_params("request_1".into(), params("mira@example.com")).unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[test]
    fn test_decided_request_cannot_change() {
        let mut request = CustomRequest::from_create_params("request_1".into(), params("mira@example.com")).unwrap();
        assert_eq!(request.handle_action(RequestAction::Reject).unwrap(), RequestStatus::Rejected);
        assert!(request.handle_action(RequestAction::Approve).is_err());
    }
}
