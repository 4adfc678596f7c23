/// Decides which accounts are administrators: an email allowlist, compared
/// case-insensitively after trimming.
#[derive(Debug, Clone, Default)]
pub struct AdminPolicy {
    admin_emails: Vec<String>,
}

impl AdminPolicy {
    pub fn new<I, S>(admin_emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            admin_emails: admin_emails
                .into_iter()
                .map(|email| email.as_ref().trim().to_lowercase())
                .filter(|email| !email.is_empty())
                .collect(),
        }
    }

    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.admin_emails.iter().any(|admin| *admin == email)
    }

    pub fn admin_count(&self) -> usize {
        self.admin_emails.len()
    }
}
