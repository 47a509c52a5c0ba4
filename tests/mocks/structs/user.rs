use serde::{Deserialize, Serialize};

/// Mock User (row of `users`)
///
/// The listing endpoints never return users; they are only needed to seed
/// the join.
///
/// # Examples
///
/// ```rust
/// use crate::mocks::structs::user::MockUserDTO;
///
/// let user = MockUserDTO { id: 1, username: String::from("alice") };
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MockUserDTO {
    pub id: i32,
    pub username: String,
}
