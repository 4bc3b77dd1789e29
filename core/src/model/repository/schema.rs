diesel::table! {
    Video (id) {
        id -> Text,
        path -> Text,
        resolution -> Nullable<Text>,
        bitrate -> Nullable<Text>,
        status -> Text,
        original_size -> BigInt,
    }
}
