diesel::table! {
    planet_angles (id) {
        id -> Int8,
        recorded_at -> Timestamptz,
        venus -> Nullable<Float8>,
        mars -> Nullable<Float8>,
        jupiter -> Nullable<Float8>,
        saturn -> Nullable<Float8>,
    }
}
