use crate::SearchResult;

const UNKNOWN_ARTIST: &str = "Unknown";
const FREE_PRICE: &str = "Free";

const ZERO_DECIMAL_CURRENCIES: [&str; 3] = ["JPY", "KRW", "VND"];

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" | "AUD" | "CAD" | "NZD" | "MXN" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" | "CNY" => Some("¥"),
        "KRW" => Some("₩"),
        "INR" => Some("₹"),
        "RUB" => Some("₽"),
        _ => None,
    }
}

impl SearchResult {
    pub fn artist_display(&self) -> &str {
        if self.artist_name.is_empty() {
            UNKNOWN_ARTIST
        } else {
            &self.artist_name
        }
    }

    /// Human readable name of the raw store kind.
    pub fn kind_for_display(&self) -> &str {
        match self.kind.as_str() {
            "album" => "Album",
            "audiobook" => "Audio Book",
            "book" => "Book",
            "ebook" => "E-Book",
            "feature-movie" => "Movie",
            "music-video" => "Music Video",
            "podcast" => "Podcast",
            "software" => "App",
            "song" => "Song",
            "tv-episode" => "TV Episode",
            other => other,
        }
    }

    /// Single line shown under the name in result lists.
    pub fn subtitle(&self) -> String {
        if self.artist_name.is_empty() {
            UNKNOWN_ARTIST.to_string()
        } else {
            format!("{} ({})", self.artist_name, self.kind_for_display())
        }
    }

    pub fn is_free(&self) -> bool {
        self.price <= 0.0
    }

    pub fn price_text(&self) -> String {
        if self.is_free() {
            return FREE_PRICE.to_string();
        }

        let amount = if ZERO_DECIMAL_CURRENCIES.contains(&self.currency.as_str()) {
            format!("{:.0}", self.price)
        } else {
            format!("{:.2}", self.price)
        };

        match currency_symbol(&self.currency) {
            Some(symbol) => format!("{}{}", symbol, amount),
            None if self.currency.is_empty() => amount,
            None => format!("{} {}", self.currency, amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::SearchResult;

    fn result(artist_name: &str, kind: &str, currency: &str, price: f64) -> SearchResult {
        SearchResult {
            name: "Name".into(),
            artist_name: artist_name.into(),
            store_url: "https://example.com".into(),
            kind: kind.into(),
            currency: currency.into(),
            price,
            ..SearchResult::default()
        }
    }

    #[test]
    fn test_empty_artist_is_displayed_as_unknown() {
        let result = result("", "song", "USD", 0.0);

        assert_eq!("Unknown", result.artist_display());
        assert_eq!("Unknown", result.subtitle());
    }

    #[test]
    fn test_subtitle_includes_kind_display_name() {
        let result = result("Robert Miles", "song", "USD", 0.99);

        assert_eq!("Robert Miles (Song)", result.subtitle());
    }

    #[test]
    fn test_kind_for_display() {
        assert_eq!("Audio Book", result("a", "audiobook", "", 0.0).kind_for_display());
        assert_eq!("App", result("a", "software", "", 0.0).kind_for_display());
        assert_eq!("E-Book", result("a", "ebook", "", 0.0).kind_for_display());
        assert_eq!("mac-software", result("a", "mac-software", "", 0.0).kind_for_display());
    }

    #[test]
    fn test_price_text() {
        assert_eq!("Free", result("a", "song", "USD", 0.0).price_text());
        assert_eq!("Free", result("a", "song", "USD", -1.0).price_text());
        assert_eq!("$1.29", result("a", "song", "USD", 1.29).price_text());
        assert_eq!("¥250", result("a", "song", "JPY", 250.0).price_text());
        assert_eq!("CHF 2.00", result("a", "song", "CHF", 2.0).price_text());
    }
}
