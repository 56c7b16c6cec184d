//! Predefined keys
//!
//! Common column names, and the soft-delete conditions built on them. These
//! are conveniences for callers; nothing in the algebra depends on them.

use crate::capability::Condition;
use crate::descriptor::key;

/// `id`
pub const ID: &str = "id";
/// `user_id`
pub const USER_ID: &str = "user_id";
/// `task_id`
pub const TASK_ID: &str = "task_id";
/// `group_id`
pub const GROUP_ID: &str = "group_id";

/// `addr`
pub const ADDR: &str = "addr";
/// `name`
pub const NAME: &str = "name";
/// `note`
pub const NOTE: &str = "note";
/// `desc`
pub const DESC: &str = "desc";
/// `code`
pub const CODE: &str = "code";
/// `conf`
pub const CONF: &str = "conf";
/// `data`
pub const DATA: &str = "data";
/// `date`
pub const DATE: &str = "date";
/// `sort`
pub const SORT: &str = "sort";
/// `type`
pub const TYPE: &str = "type";

/// `email`
pub const EMAIL: &str = "email";
/// `phone`
pub const PHONE: &str = "phone";
/// `avatar`
pub const AVATAR: &str = "avatar";
/// `password`
pub const PASSWORD: &str = "password";

/// `total`
pub const TOTAL: &str = "total";
/// `item_id`
pub const ITEM_ID: &str = "item_id";
/// `item_type`
pub const ITEM_TYPE: &str = "item_type";

/// `status`
pub const STATUS: &str = "status";
/// `is_enabled`
pub const IS_ENABLED: &str = "is_enabled";
/// `is_disabled`
pub const IS_DISABLED: &str = "is_disabled";

/// `created_at`
pub const CREATED_AT: &str = "created_at";
/// `updated_at`
pub const UPDATED_AT: &str = "updated_at";
/// `deleted_at`
pub const DELETED_AT: &str = "deleted_at";
/// `expired_at`
pub const EXPIRED_AT: &str = "expired_at";

/// `deleted_at` value of a row that has not been soft-deleted
pub const NOT_DELETED_AT: &str = "0000-00-00 00:00:00";

/// Row has been soft-deleted
pub fn is_deleted() -> Condition {
    key(DELETED_AT).not_eq(NOT_DELETED_AT)
}

/// Row has not been soft-deleted
pub fn is_not_deleted() -> Condition {
    key(DELETED_AT).eq(NOT_DELETED_AT)
}

/// [`is_not_deleted`] with the key scoped to `table`
pub fn is_not_deleted_in(table: &str) -> Condition {
    key(DELETED_AT).scope(table).eq(NOT_DELETED_AT)
}
