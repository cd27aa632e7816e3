use juniper::{FieldError, IntoFieldError, Object, ScalarValue, Value};

use crate::common::DomainError;

/// Domain errors surface as resolver errors carrying `extensions.code`.
impl<S: ScalarValue> IntoFieldError<S> for DomainError {
    fn into_field_error(self) -> FieldError<S> {
        let mut extensions = Object::with_capacity(1);
        extensions.add_field("code", Value::scalar(self.code().to_string()));
        FieldError::new(self.to_string(), Value::Object(extensions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::EntityKind;

    #[test]
    fn test_field_error_carries_code() {
        let err: FieldError = DomainError::not_found(EntityKind::Post, "abc").into_field_error();

        assert_eq!(err.message(), "Post with id abc not found");
        assert_eq!(
            err.extensions(),
            &juniper::graphql_value!({ "code": "NOT_FOUND" })
        );
    }
}
