pub use super::user_birthday::Entity as UserBirthday;
pub use super::user_interaction::Entity as UserInteraction;
