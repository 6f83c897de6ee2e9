use bson::oid::ObjectId;

use crate::error::StoreError;

pub fn parse_resource_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_resource_id_is_reported() {
        assert!(matches!(
            parse_resource_id("not-an-id"),
            Err(StoreError::MalformedId(id)) if id == "not-an-id"
        ));
    }

    #[test]
    fn hex_resource_id_is_parsed() {
        let id = ObjectId::new();
        assert_eq!(parse_resource_id(&id.to_hex()).unwrap(), id);
    }
}
