// Database schema for the housing service
diesel::table! {
    buildings (id) {
        id -> Integer,
        name -> Text,
        address -> Text,
    }
}

diesel::table! {
    housing_units (id) {
        id -> Integer,
        building_id -> Integer,
        unit_number -> Text,
        created_datetime -> Timestamp,
        modified_datetime -> Timestamp,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        first_name -> Text,
        last_name -> Text,
        email_address -> Text,  // unique
        password -> Text,       // SHA-256 hex digest
    }
}

diesel::joinable!(housing_units -> buildings (building_id));

diesel::allow_tables_to_appear_in_same_query!(buildings, housing_units, users,);
