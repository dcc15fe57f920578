use log::debug;
use serde::{Deserialize, Deserializer};

/// Body of a read API response once the JSONP padding is gone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadResponse {
    #[serde(default)]
    pub tumblelog: Option<Tumblelog>,
    #[serde(rename = "posts-total", default, deserialize_with = "lenient_u64")]
    pub posts_total: u64,
    #[serde(default, deserialize_with = "skip_malformed_posts")]
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tumblelog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
}

/// One blog entry. Fields shared by every type live here, the rest in
/// [`PostKind`].
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "unix-timestamp", default, deserialize_with = "lenient_i64")]
    pub unix_timestamp: i64,
    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub tags: Vec<String>,
    #[serde(rename = "url-with-slug", default, deserialize_with = "nullable")]
    pub url_with_slug: String,
    #[serde(flatten)]
    pub kind: PostKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PostKind {
    Regular {
        #[serde(rename = "regular-title", default, deserialize_with = "nullable")]
        title: String,
        #[serde(rename = "regular-body", default, deserialize_with = "nullable")]
        body: String,
    },
    Photo {
        #[serde(rename = "photo-url-1280", default, deserialize_with = "nullable")]
        photo_url: String,
        #[serde(rename = "photo-caption", default, deserialize_with = "nullable")]
        caption: String,
    },
    Quote {
        #[serde(rename = "quote-text", default, deserialize_with = "nullable")]
        text: String,
        #[serde(rename = "quote-source", default, deserialize_with = "nullable")]
        source: String,
    },
    Link {
        #[serde(rename = "link-text", default, deserialize_with = "nullable")]
        text: String,
        #[serde(rename = "link-url", default, deserialize_with = "nullable")]
        url: String,
        #[serde(rename = "link-description", default, deserialize_with = "nullable")]
        description: String,
    },
    /// Any type without a renderer (video, audio, conversation, answer, ...).
    #[serde(other)]
    Unsupported,
}

impl PostKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            PostKind::Regular { .. } => "regular",
            PostKind::Photo { .. } => "photo",
            PostKind::Quote { .. } => "quote",
            PostKind::Link { .. } => "link",
            PostKind::Unsupported => "unsupported",
        }
    }
}

impl Post {
    pub fn is_supported(&self) -> bool {
        !matches!(self.kind, PostKind::Unsupported)
    }
}

/// `null` decodes to the type's default, like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A post that fails to decode (no `type`, wrong shapes) is dropped the same
/// way an unsupported type is, instead of failing the whole response.
fn skip_malformed_posts<'de, D>(deserializer: D) -> Result<Vec<Post>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<serde_json::Value> = nullable(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Post>(value) {
            Ok(post) => Some(post),
            Err(e) => {
                debug!("Skipping malformed post: {}", e);
                None
            }
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Int(n)) => n,
        Some(NumberOrString::Float(f)) => f as i64,
        // Mirrors parseInt: leading digits only, anything else is 0
        Some(NumberOrString::Text(s)) => {
            let trimmed = s.trim();
            let end = trimmed
                .char_indices()
                .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
                .map_or(trimmed.len(), |(i, _)| i);
            trimmed[..end].parse().unwrap_or(0)
        }
        None => 0,
    })
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_i64(deserializer)?.max(0) as u64)
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Int(n)) => n.to_string(),
        Some(NumberOrString::Float(f)) => f.to_string(),
        Some(NumberOrString::Text(s)) => s,
        None => String::new(),
    })
}

/// Numbers become their text and `null` items are skipped.
fn lenient_string_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Vec<Option<NumberOrString>> = nullable(deserializer)?;
    Ok(items
        .into_iter()
        .flatten()
        .map(|item| match item {
            NumberOrString::Int(n) => n.to_string(),
            NumberOrString::Float(f) => f.to_string(),
            NumberOrString::Text(s) => s,
        })
        .collect())
}
