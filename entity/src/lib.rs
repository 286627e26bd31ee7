pub mod item;
pub mod user;
pub mod user_role;

/*
 Items are public: anyone can list a found item and anyone can search them.
 Accounts only exist for administration. A user holding a (user_id, "admin")
 role row may review and delete listings; everyone else never signs in.
 Items are never edited, only deleted.
 */
