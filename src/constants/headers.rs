pub const AUTHORIZATION: &str = "Authorization";

pub const FIXED: [(&str, &str); 4] = [
    ("accept", "application/json"),
    ("accept-encoding", "gzip, deflate"),
    ("content-type", "application/json"),
    ("cache-control", "no-cache"),
];
