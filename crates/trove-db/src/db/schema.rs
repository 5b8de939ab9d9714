diesel::table! {
    account (id) {
        id -> Text,
        email -> Text,
        first_name -> Text,
        last_name -> Text,
        password_hash -> Text,
        is_admin -> Bool,
        failed_login_count -> Integer,
        created_at -> Timestamp,
    }
}

diesel::table! {
    asset (id) {
        id -> Text,
        owner_id -> Text,
        name -> Text,
        description -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(asset -> account (owner_id));

diesel::allow_tables_to_appear_in_same_query!(account, asset);
