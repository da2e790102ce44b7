use crate::error::ProvisionerError;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};

const REGION_FIELD: usize = 3;
const ACCOUNT_FIELD: usize = 4;

/// Region and account of the running function, taken from `invoked_function_arn`.
#[derive(Debug, PartialEq)]
pub struct InvocationArn {
    pub region: String,
    pub account_id: String,
}

impl TryFrom<&str> for InvocationArn {
    type Error = ProvisionerError;

    fn try_from(arn: &str) -> Result<Self, Self::Error> {
        let fields: Vec<&str> = arn.split(':').collect();
        let field = |index: usize| {
            fields
                .get(index)
                .filter(|value| !value.is_empty())
                .map(|value| value.to_string())
                .ok_or_else(|| ProvisionerError::InvalidArn(arn.to_string()))
        };
        if field(0)? != "arn" {
            return Err(ProvisionerError::InvalidArn(arn.to_string()));
        }

        Ok(InvocationArn {
            region: field(REGION_FIELD)?,
            account_id: field(ACCOUNT_FIELD)?,
        })
    }
}

/// SNS topic every alarm created during one invocation notifies.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationTarget(String);

impl NotificationTarget {
    pub fn resolve(invocation: &InvocationArn, topic_name: &str) -> Self {
        NotificationTarget(format!(
            "arn:aws:sns:{}:{}:{}",
            invocation.region, invocation.account_id, topic_name
        ))
    }

    pub fn arn(&self) -> &str {
        &self.0
    }
}

impl Display for NotificationTarget {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ProvisionerError;
    use crate::invocation_arn::{InvocationArn, NotificationTarget};
    use std::convert::TryFrom;

    #[test]
    fn test_try_from() {
        let arn = InvocationArn::try_from("arn:aws:lambda:us-east-1:123456789012:function:f");
        assert_eq!(
            arn.unwrap(),
            InvocationArn {
                region: "us-east-1".to_string(),
                account_id: "123456789012".to_string(),
            }
        );
    }

    #[test]
    fn test_try_from_with_alias() {
        let arn = InvocationArn::try_from(
            "arn:aws:lambda:ap-northeast-1:123456789012:function:provisioner:live",
        )
        .unwrap();
        assert_eq!(arn.region, "ap-northeast-1");
        assert_eq!(arn.account_id, "123456789012");
    }

    #[test]
    fn test_try_from_too_short() {
        let result = InvocationArn::try_from("arn:aws:lambda:us-east-1");
        assert_eq!(
            result.err().unwrap(),
            ProvisionerError::InvalidArn("arn:aws:lambda:us-east-1".to_string())
        );
    }

    #[test]
    fn test_try_from_empty_account() {
        assert!(InvocationArn::try_from("arn:aws:lambda:us-east-1::function:f").is_err());
        assert!(InvocationArn::try_from("").is_err());
        assert!(InvocationArn::try_from("urn:aws:lambda:us-east-1:1:function:f").is_err());
    }

    #[test]
    fn test_resolve() {
        let arn =
            InvocationArn::try_from("arn:aws:lambda:us-east-1:123456789012:function:f").unwrap();
        let target = NotificationTarget::resolve(&arn, "c");
        assert_eq!(target.arn(), "arn:aws:sns:us-east-1:123456789012:c");
        assert_eq!(target.to_string(), "arn:aws:sns:us-east-1:123456789012:c");
    }
}
