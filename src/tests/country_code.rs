pub struct CountryCode {}

#[allow(unused)]
impl CountryCode {
    pub fn us() -> &'static str {
        "1"
    }

    pub fn de() -> &'static str {
        "49"
    }

    pub fn gb() -> &'static str {
        "44"
    }

    pub fn fr() -> &'static str {
        "33"
    }
}
