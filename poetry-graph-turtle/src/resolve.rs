//! Object resolution for property lines.
//!
//! A property line is `<predicate> <object>` with no delimiter between the
//! two. The object is found by trying known subjects first, as string
//! suffixes of the line, and only then falling back to the last word.

/// How the object of a property line was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectSource {
    /// The object is an existing subject key matched as a suffix.
    Declared,
    /// The object is the last whitespace-separated word.
    LastWord,
}

/// A property line split into predicate and object.
///
/// Both parts borrow from the line content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub predicate: &'a str,
    pub object: &'a str,
    pub source: ObjectSource,
}

/// Resolve the object of `content` against the known subject `keys`.
///
/// `content` should have no trailing whitespace. Returns `None` only when
/// no key matches and the content has no words at all.
pub fn resolve_object<'k, 'a, I>(keys: I, content: &'a str) -> Option<Resolution<'a>>
where
    I: IntoIterator<Item = &'k str>,
{
    if let Some(len) = longest_suffix(keys, content) {
        let split = content.len() - len;
        return Some(Resolution {
            predicate: content[..split].trim_end(),
            object: &content[split..],
            source: ObjectSource::Declared,
        });
    }

    let (predicate, object) = last_word(content)?;
    Some(Resolution {
        predicate,
        object,
        source: ObjectSource::LastWord,
    })
}

/// Byte length of the longest key that `content` ends with.
///
/// This is a plain string suffix test: `"paragraph"` ends with `"graph"`.
/// Two different keys of the same length cannot both be suffixes of one
/// string, so the maximum is unique.
pub fn longest_suffix<'k, I>(keys: I, content: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'k str>,
{
    keys.into_iter()
        .filter(|key| !key.is_empty() && content.ends_with(*key))
        .map(str::len)
        .max()
}

/// Split off the last whitespace-separated word.
///
/// Returns `(rest, word)` with `rest` right-trimmed, or `None` if there is
/// no word.
pub fn last_word(content: &str) -> Option<(&str, &str)> {
    let trimmed = content.trim_end();
    let word = trimmed.split_whitespace().next_back()?;
    let rest = &trimmed[..trimmed.len() - word.len()];
    Some((rest.trim_end(), word))
}
