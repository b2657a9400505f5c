//! Directory user record as exchanged with the REST service.
//!
//! Field names follow the directory schema (camelCase on the wire). Unset
//! values serialize as explicit `null` so edit forms can bind to every key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session timeout, in minutes, assigned to new users.
const DEFAULT_TIMEOUT_MINUTES: i32 = 60;

/// Postal address attributes of a directory user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    /// Street address lines.
    pub addresses: Option<Vec<String>>,
    /// Building name or number.
    pub building: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Department number.
    pub department_number: Option<String>,
    /// Post office box.
    pub post_office_box: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Room number.
    pub room_number: Option<String>,
    /// State or province.
    pub state: Option<String>,
}

/// One directory principal managed by the console.
///
/// Collections are `None` until the caller populates them; an empty list and
/// an absent list mean different things to the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    /// Postal address sub-record.
    pub address: Address,
    /// Administrative role assignments.
    pub admin_roles: Option<Vec<Value>>,
    /// Administrative session payload.
    pub admin_session: Option<Value>,
    /// Date the account becomes valid (`YYYYMMDD`).
    pub begin_date: Option<String>,
    /// Start of the lockout window.
    pub begin_lock_date: Option<String>,
    /// Daily start time (`HHMM`).
    pub begin_time: Option<String>,
    /// Common name.
    pub cn: Option<String>,
    /// Tenant the record belongs to.
    pub context_id: Option<String>,
    /// Days of the week the account may sign in.
    pub day_mask: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
    /// Distinguished name.
    pub dn: Option<String>,
    /// Email addresses.
    pub emails: Option<Vec<String>>,
    /// Employee type.
    pub employee_type: Option<String>,
    /// Date the account expires (`YYYYMMDD`).
    pub end_date: Option<String>,
    /// End of the lockout window.
    pub end_lock_date: Option<String>,
    /// Daily end time (`HHMM`).
    pub end_time: Option<String>,
    /// Fully qualified class name of the entity.
    pub fqcn: Option<String>,
    /// GECOS field.
    pub gecos: Option<String>,
    /// POSIX group id.
    pub gid_number: Option<String>,
    /// POSIX home directory.
    pub home_directory: Option<String>,
    /// Directory-internal identifier.
    pub internal_id: Option<String>,
    /// Base64 encoded photo.
    pub jpeg_photo: Option<String>,
    /// Whether the account is locked.
    pub locked: bool,
    /// POSIX login shell.
    pub login_shell: Option<String>,
    /// Mobile numbers.
    pub mobiles: Option<Vec<String>>,
    /// Audit modification code.
    pub mod_code: Option<String>,
    /// Audit modification id.
    pub mod_id: Option<String>,
    /// Entity name.
    pub name: Option<String>,
    /// Replacement password for change requests.
    pub new_password: Option<String>,
    /// Organizational unit.
    pub ou: Option<String>,
    /// Current password.
    pub password: Option<String>,
    /// Telephone numbers.
    pub phones: Option<Vec<String>>,
    /// Password policy name.
    pub pw_policy: Option<String>,
    /// Whether the password must be reset on next sign-in.
    pub reset: bool,
    /// RBAC role assignments.
    pub roles: Option<Vec<Value>>,
    /// Optimistic concurrency sequence.
    pub sequence_id: i64,
    /// Surname.
    pub sn: Option<String>,
    /// Whether this is a protected system account.
    pub system: bool,
    /// Session timeout in minutes.
    pub timeout: i32,
    /// Job title.
    pub title: Option<String>,
    /// POSIX user id.
    pub uid_number: Option<String>,
    /// Login identifier.
    pub user_id: Option<String>,
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            address: Address::default(),
            admin_roles: None,
            admin_session: None,
            begin_date: None,
            begin_lock_date: None,
            begin_time: None,
            cn: None,
            context_id: None,
            day_mask: None,
            description: None,
            display_name: None,
            dn: None,
            emails: None,
            employee_type: None,
            end_date: None,
            end_lock_date: None,
            end_time: None,
            fqcn: None,
            gecos: None,
            gid_number: None,
            home_directory: None,
            internal_id: None,
            jpeg_photo: None,
            locked: false,
            login_shell: None,
            mobiles: None,
            mod_code: None,
            mod_id: None,
            name: None,
            new_password: None,
            ou: None,
            password: None,
            phones: None,
            pw_policy: None,
            reset: false,
            roles: None,
            sequence_id: 0,
            sn: None,
            system: false,
            timeout: DEFAULT_TIMEOUT_MINUTES,
            title: None,
            uid_number: None,
            user_id: None,
        }
    }
}

/// Blank user for create forms.
#[must_use]
pub fn new_user() -> UserRecord {
    UserRecord::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTED_KEYS: [&str; 6] = [
        "address",
        "locked",
        "reset",
        "sequenceId",
        "system",
        "timeout",
    ];

    #[test]
    fn new_user_has_documented_defaults() {
        let user = new_user();
        assert!(!user.locked);
        assert!(!user.reset);
        assert!(!user.system);
        assert_eq!(user.timeout, 60);
        assert_eq!(user.sequence_id, 0);
        assert_eq!(user.address, Address::default());
        assert!(user.roles.is_none());
        assert!(user.admin_roles.is_none());
        assert!(user.emails.is_none());
        assert!(user.user_id.is_none());
    }

    #[test]
    fn every_other_field_serializes_as_null() {
        let value = serde_json::to_value(new_user()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 43);
        for (key, field) in object {
            if DEFAULTED_KEYS.contains(&key.as_str()) {
                continue;
            }
            assert!(field.is_null(), "{key} should start unset");
        }
        let address = object["address"].as_object().unwrap();
        assert_eq!(address.len(), 9);
        assert!(address.values().all(Value::is_null));
        assert_eq!(object["timeout"], 60);
        assert_eq!(object["sequenceId"], 0);
        assert_eq!(object["locked"], false);
    }

    #[test]
    fn separate_calls_do_not_share_address() {
        let mut first = new_user();
        let second = new_user();
        first.address.city = Some("Springfield".into());
        first.address.addresses = Some(vec!["1 Main St".into()]);
        assert!(second.address.city.is_none());
        assert!(second.address.addresses.is_none());
    }

    #[test]
    fn partial_payload_fills_defaults() {
        let user: UserRecord = serde_json::from_str(
            r#"{"userId":"jdoe","cn":"John Doe","sn":"Doe","roles":[{"name":"admin"}],"address":{"city":"Paris"},"locked":true}"#,
        )
        .unwrap();
        assert_eq!(user.user_id.as_deref(), Some("jdoe"));
        assert_eq!(user.address.city.as_deref(), Some("Paris"));
        assert!(user.address.state.is_none());
        assert!(user.locked);
        assert_eq!(user.timeout, 60);
        assert_eq!(user.roles.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn wire_shape_round_trips() {
        let mut user = new_user();
        user.user_id = Some("jdoe".into());
        user.uid_number = Some("1001".into());
        user.phones = Some(vec![]);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""uidNumber":"1001""#));
        assert!(json.contains(r#""phones":[]"#));
        let decoded: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, user);
    }
}
