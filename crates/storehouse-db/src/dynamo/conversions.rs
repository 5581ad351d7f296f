//! DynamoDB attribute conversion functions.
//!
//! Pure functions between `AttributeValue` maps and [`User`]; testable
//! without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use storehouse_core::User;

use crate::error::{DbError, DbResult};

/// Partition key attribute.
pub const KEY_ID: &str = "id";

/// Convert a User to a DynamoDB item.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    [
        (KEY_ID, &user.id),
        ("firstname", &user.firstname),
        ("lastname", &user.lastname),
        ("username", &user.username),
        ("password", &user.password),
        ("email", &user.email),
        ("ip", &user.ip),
        ("macAddress", &user.mac_address),
        ("website", &user.website),
        ("image", &user.image),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), AttributeValue::S(value.clone())))
    .collect()
}

/// Convert a DynamoDB item to a User.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> DbResult<User> {
    Ok(User {
        id: get_string(item, KEY_ID)?,
        firstname: get_string(item, "firstname")?,
        lastname: get_string(item, "lastname")?,
        username: get_string(item, "username")?,
        password: get_string(item, "password")?,
        email: get_string(item, "email")?,
        ip: get_string(item, "ip")?,
        mac_address: get_string(item, "macAddress")?,
        website: get_string(item, "website")?,
        image: get_string(item, "image")?,
    })
}

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> DbResult<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| DbError::InvalidData(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "2".to_string(),
            firstname: "firstname".to_string(),
            lastname: "lastname".to_string(),
            username: "username".to_string(),
            password: "12345".to_string(),
            email: "email.user@example.com".to_string(),
            ip: "127.0.0.1".to_string(),
            mac_address: "FF:FF:FF:FF:FF:FF".to_string(),
            website: "website.com".to_string(),
            image: "image.png".to_string(),
        }
    }

    #[test]
    fn test_user_item_is_keyed_by_id() {
        let item = user_to_item(&sample_user());

        assert_eq!(item.get("id").unwrap().as_s().unwrap(), "2");
        assert_eq!(
            item.get("macAddress").unwrap().as_s().unwrap(),
            "FF:FF:FF:FF:FF:FF"
        );
        assert_eq!(item.len(), 10);
    }

    #[test]
    fn test_item_to_user_restores_every_field() {
        let user = sample_user();
        let restored = item_to_user(&user_to_item(&user)).unwrap();

        assert_eq!(restored, user);
    }

    #[test]
    fn test_missing_attribute_is_invalid_data() {
        let mut item = user_to_item(&sample_user());
        item.remove("email");

        let err = item_to_user(&item).unwrap_err();
        assert_eq!(err.to_string(), "Invalid data: Missing or invalid field: email");
    }

    #[test]
    fn test_non_string_attribute_is_invalid_data() {
        let mut item = user_to_item(&sample_user());
        item.insert("ip".to_string(), AttributeValue::N("127".to_string()));

        assert!(matches!(item_to_user(&item), Err(DbError::InvalidData(_))));
    }
}
