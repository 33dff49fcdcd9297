//! Deciding whether the token before the phone is a name or part of the address.

use tracing::debug;

use super::keywords::ADDRESS_KEYWORDS;

/// Shape rules for accepting a recipient name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientRules {
    address_keywords: Vec<String>,
    min_chars: usize,
    max_chars: usize,
}

impl RecipientRules {
    /// Rules with the built-in address keywords and a 2..=5 character name.
    pub fn new() -> Self {
        Self {
            address_keywords: ADDRESS_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            min_chars: 2,
            max_chars: 5,
        }
    }

    /// Add address keywords on top of the built-in ones.
    pub fn with_extra_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            let keyword = keyword.into();
            if !keyword.is_empty() && !self.address_keywords.contains(&keyword) {
                self.address_keywords.push(keyword);
            }
        }
        self
    }

    /// Set the accepted name length in characters.
    pub fn with_length(mut self, min_chars: usize, max_chars: usize) -> Self {
        self.min_chars = min_chars;
        self.max_chars = max_chars;
        self
    }

    /// Check if a token looks like a person's name.
    pub fn accepts(&self, token: &str) -> bool {
        let len = token.chars().count();
        if len < self.min_chars || len > self.max_chars {
            return false;
        }
        if token.chars().any(char::is_numeric) {
            return false;
        }
        !self
            .address_keywords
            .iter()
            .any(|keyword| token.contains(keyword.as_str()))
    }
}

impl Default for RecipientRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Address and recipient recovered from the text before the phone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameAddress {
    pub address: String,
    pub recipient: Option<String>,
}

/// Split the text before the phone into address and recipient.
///
/// The last whitespace token is the recipient if it passes `rules`; otherwise
/// the whole segment is the address.
pub fn classify_name_address(before: &str, rules: &RecipientRules) -> NameAddress {
    let tokens: Vec<&str> = before.split_whitespace().collect();

    let Some((candidate, rest)) = tokens.split_last() else {
        return NameAddress::default();
    };

    if rules.accepts(candidate) {
        debug!("Accepted recipient candidate {:?}", candidate);
        NameAddress {
            address: rest.join(" "),
            recipient: Some(candidate.to_string()),
        }
    } else {
        debug!("Rejected recipient candidate {:?}, keeping it in the address", candidate);
        NameAddress {
            address: tokens.join(" "),
            recipient: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accepts_name() {
        let rules = RecipientRules::new();
        assert!(rules.accepts("최용남"));
        assert!(rules.accepts("남궁민수"));
        assert!(!rules.accepts("김")); // too short
        assert!(!rules.accepts("가나다라마바")); // too long
        assert!(!rules.accepts("101호"));
        assert!(!rules.accepts("해뜨는아파트"));
        assert!(!rules.accepts("중앙로"));
    }

    #[test]
    fn test_classify_with_name() {
        let result = classify_name_address(
            "강원도 홍천군 서석면 해뜨는집 최용남",
            &RecipientRules::new(),
        );
        assert_eq!(
            result,
            NameAddress {
                address: "강원도 홍천군 서석면 해뜨는집".to_string(),
                recipient: Some("최용남".to_string()),
            }
        );
    }

    #[test]
    fn test_classify_rejected_tail() {
        let result = classify_name_address("서울시 강남구 테헤란로 101동 1203호", &RecipientRules::new());
        assert_eq!(result.address, "서울시 강남구 테헤란로 101동 1203호");
        assert_eq!(result.recipient, None);
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(
            classify_name_address("  ", &RecipientRules::new()),
            NameAddress::default()
        );
    }

    #[test]
    fn test_name_only() {
        let result = classify_name_address("박민수", &RecipientRules::new());
        assert_eq!(result.address, "");
        assert_eq!(result.recipient.as_deref(), Some("박민수"));
    }

    #[test]
    fn test_name_with_keyword_syllable_stays_in_address() {
        // 길 is an address keyword, so 홍길순 reads as part of the address.
        let rules = RecipientRules::new();
        assert!(!rules.accepts("홍길순"));

        let result = classify_name_address("서울시 마포구 홍길순", &rules);
        assert_eq!(result.address, "서울시 마포구 홍길순");
        assert_eq!(result.recipient, None);
    }

    #[test]
    fn test_extra_keywords() {
        let rules = RecipientRules::new().with_extra_keywords(["마을"]);
        assert!(!rules.accepts("햇살마을"));
        assert!(RecipientRules::new().accepts("햇살마을"));
    }
}
