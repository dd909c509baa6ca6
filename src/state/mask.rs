//! Display masks for document numbers

/// Placeholder for a digit slot in a mask pattern.
const DIGIT_SLOT: char = '#';

/// Display mask for a document number.
///
/// A pattern holds literal separators and `#` digit slots. The mask is a
/// presentation template only; the canonical stored value stays digit-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskPattern {
    pattern: &'static str,
}

impl MaskPattern {
    /// CPF mask (11 digit slots).
    pub const CPF: MaskPattern = MaskPattern {
        pattern: "###.###.###-##",
    };

    /// CNPJ mask (14 digit slots).
    pub const CNPJ: MaskPattern = MaskPattern {
        pattern: "##.###.###/####-##",
    };

    /// The raw pattern string.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Number of digit slots in the pattern.
    #[allow(dead_code)]
    pub fn digit_slots(&self) -> usize {
        self.pattern.chars().filter(|c| *c == DIGIT_SLOT).count()
    }

    /// Format digits for display.
    ///
    /// Literal separators are emitted between consumed digits; formatting
    /// stops when the digits run out, and digits beyond the slot count are
    /// ignored. Non-digit characters in the input are skipped.
    pub fn apply(&self, digits: &str) -> String {
        let mut out = String::with_capacity(self.pattern.len());
        let mut remaining = digits.chars().filter(char::is_ascii_digit);
        let mut next = remaining.next();
        for slot in self.pattern.chars() {
            let Some(digit) = next else { break };
            if slot == DIGIT_SLOT {
                out.push(digit);
                next = remaining.next();
            } else {
                out.push(slot);
            }
        }
        out
    }
}
