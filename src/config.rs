pub const STUDIO_NAME: &str = "SS Edit Studio";

pub fn contact_email() -> &'static str {
    "editswithssedits@gmail.com"
}

pub fn mailto_href() -> String {
    format!("mailto:{}", contact_email())
}
