use serde::{Deserialize, Serialize};

/// The user-editable part of an email: what gets merged into the layout and
/// what is sent to `/uploadEmailConfig`.
///
/// The backend is the system of record once a configuration is submitted;
/// on the client this is only the latest in-memory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfig {
    /// Plain title text, substituted for `{{title}}`.
    pub title: String,
    /// Rich HTML fragment produced by the editor, substituted for `{{content}}`.
    pub content: String,
    /// Absolute URL of the last uploaded image, or empty.
    pub image_url: String,
}

/// Names exactly one field of [`EmailConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailField {
    Title,
    Content,
    ImageUrl,
}

impl EmailField {
    pub const ALL: [EmailField; 3] = [EmailField::Title, EmailField::Content, EmailField::ImageUrl];
}

impl EmailConfig {
    /// Replaces a single field, leaving the other two untouched.
    ///
    /// No validation is done: any string, including the empty one, is accepted.
    pub fn set_field(&mut self, field: EmailField, value: String) {
        match field {
            EmailField::Title => self.title = value,
            EmailField::Content => self.content = value,
            EmailField::ImageUrl => self.image_url = value,
        }
    }

    pub fn field(&self, field: EmailField) -> &str {
        match field {
            EmailField::Title => &self.title,
            EmailField::Content => &self.content,
            EmailField::ImageUrl => &self.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> EmailConfig {
        EmailConfig {
            title: "Weekly digest".to_string(),
            content: "<p>Hello <b>there</b></p>".to_string(),
            image_url: "https://example.com/uploads/a.png".to_string(),
        }
    }

    #[test]
    fn set_field_only_touches_the_named_field() {
        let values = ["", "x", "<h1>{{title}}</h1>", "ünïcødé ✉"];
        for field in EmailField::ALL {
            for value in values {
                let before = populated();
                let mut after = before.clone();
                after.set_field(field, value.to_string());

                assert_eq!(after.field(field), value);
                for other in EmailField::ALL.into_iter().filter(|f| *f != field) {
                    assert_eq!(after.field(other), before.field(other), "{other:?} changed");
                }
            }
        }
    }

    #[test]
    fn serializes_with_camel_case_image_url() {
        let json = serde_json::to_value(populated()).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/uploads/a.png");
        assert!(json.get("image_url").is_none());

        let back: EmailConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, populated());
    }
}
