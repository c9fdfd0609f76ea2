use std::io::{Read, Seek};

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use csv::{StringRecord, Trim};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::menu_item::{NewMenuItem, UpdateMenuItem};

/// Maximum allowed length for a dish name.
const NAME_MAX_LEN: usize = 255;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for a category label.
const CATEGORY_MAX_LEN_VALIDATOR: u64 = 100;

/// Result type returned by the menu form helpers.
pub type MenuFormResult<T> = Result<T, MenuFormError>;

/// Errors that can occur while processing menu forms.
#[derive(Debug, Error)]
pub enum MenuFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("dish name cannot be empty")]
    EmptyName,
    /// The uploaded CSV is missing required columns.
    #[error("upload is missing the required `name` or `price` headers")]
    MissingRequiredHeaders,
    /// A CSV row did not include a dish name.
    #[error("row {row} is missing a dish name")]
    UploadMissingName { row: usize },
    /// A CSV row did not include a price.
    #[error("row {row} is missing a price")]
    UploadMissingPrice { row: usize },
    /// A CSV row contained a price that cannot be parsed.
    #[error("row {row} has invalid price `{value}`")]
    UploadInvalidPrice { row: usize, value: String },
    /// The uploaded CSV did not contain any usable dishes.
    #[error("upload contains no dishes")]
    EmptyUpload,
    /// CSV parsing failures.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    /// Failures while reading the uploaded file.
    #[error("failed to read upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Payload submitted when adding one dish to the menu.
#[derive(Debug, Deserialize, Validate)]
pub struct AddMenuItemForm {
    /// Name entered by the owner.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Optional menu section.
    #[validate(length(max = CATEGORY_MAX_LEN_VALIDATOR))]
    pub category: Option<String>,
    /// Price in the smallest currency unit; never negative.
    #[validate(range(min = 0))]
    pub price_cents: i32,
    /// Optional dish photo URL.
    #[validate(url)]
    pub image_url: Option<String>,
    /// Whether the dish can currently be ordered; defaults to true.
    pub available: Option<bool>,
    /// Allergen labels attached to the dish.
    pub allergens: Option<Vec<String>>,
}

impl AddMenuItemForm {
    /// Validates and sanitizes the payload into a domain `NewMenuItem`.
    pub fn into_new_menu_item(self, restaurant_id: i32) -> MenuFormResult<NewMenuItem> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(MenuFormError::EmptyName);
        }

        let mut new_item = NewMenuItem::new(restaurant_id, sanitized_name, self.price_cents);

        if let Some(description) = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty())
        {
            new_item = new_item.with_description(description);
        }

        if let Some(category) = self
            .category
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty())
        {
            new_item = new_item.with_category(category);
        }

        if let Some(image_url) = self
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            new_item = new_item.with_image_url(image_url);
        }

        if let Some(available) = self.available {
            new_item = new_item.with_available(available);
        }

        if let Some(allergens) = self.allergens {
            new_item = new_item.with_allergens(sanitize_allergens(allergens));
        }

        Ok(new_item)
    }
}

/// Payload submitted when editing one dish.
///
/// Absent fields stay unchanged; an empty string clears the stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct EditMenuItemForm {
    /// Optional new name.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = CATEGORY_MAX_LEN_VALIDATOR))]
    pub category: Option<String>,
    /// Optional price update in the smallest currency unit.
    #[validate(range(min = 0))]
    pub price_cents: Option<i32>,
    pub image_url: Option<String>,
    pub available: Option<bool>,
    pub allergens: Option<Vec<String>>,
}

impl EditMenuItemForm {
    /// Validates and sanitizes the payload into a domain `UpdateMenuItem`.
    pub fn into_update_menu_item(self) -> MenuFormResult<UpdateMenuItem> {
        self.validate()?;

        let mut updates = UpdateMenuItem::new();

        if let Some(name) = self.name {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(MenuFormError::EmptyName);
            }
            updates = updates.name(sanitized);
        }

        if let Some(description) = self.description {
            let sanitized = sanitize_multiline_text(&description);
            updates = updates.description(if sanitized.is_empty() {
                None
            } else {
                Some(sanitized)
            });
        }

        if let Some(category) = self.category {
            let sanitized = sanitize_inline_text(&category);
            updates = updates.category(if sanitized.is_empty() {
                None
            } else {
                Some(sanitized)
            });
        }

        if let Some(price_cents) = self.price_cents {
            updates = updates.price_cents(price_cents);
        }

        if let Some(image_url) = self.image_url {
            let trimmed = image_url.trim();
            updates = updates.image_url(if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            });
        }

        if let Some(available) = self.available {
            updates = updates.available(available);
        }

        if let Some(allergens) = self.allergens {
            updates = updates.allergens(sanitize_allergens(allergens));
        }

        Ok(updates)
    }
}

/// Multipart upload used to import a whole menu from CSV.
///
/// Expected headers: `name` and `price` (decimal currency units), plus
/// optional `description`, `category`, `available` and `allergens`
/// (semicolon-separated).
#[derive(Debug, MultipartForm)]
pub struct UploadMenuForm {
    #[multipart(limit = "1MB")]
    pub csv: TempFile,
}

impl UploadMenuForm {
    /// Parse the uploaded CSV into a list of domain `NewMenuItem` values.
    pub fn into_new_menu_items(&mut self, restaurant_id: i32) -> MenuFormResult<Vec<NewMenuItem>> {
        self.csv.file.rewind()?;
        parse_menu_csv(self.csv.file.by_ref(), restaurant_id)
    }
}

struct MenuCsvHeaders {
    name: Option<usize>,
    description: Option<usize>,
    category: Option<usize>,
    price: Option<usize>,
    available: Option<usize>,
    allergens: Option<usize>,
}

fn locate_menu_headers(headers: &StringRecord) -> MenuCsvHeaders {
    let mut located = MenuCsvHeaders {
        name: None,
        description: None,
        category: None,
        price: None,
        available: None,
        allergens: None,
    };

    for (index, header) in headers.iter().enumerate() {
        let header = header.trim();
        if header.eq_ignore_ascii_case("name") {
            located.name = Some(index);
        } else if header.eq_ignore_ascii_case("description") {
            located.description = Some(index);
        } else if header.eq_ignore_ascii_case("category") {
            located.category = Some(index);
        } else if header.eq_ignore_ascii_case("price") {
            located.price = Some(index);
        } else if header.eq_ignore_ascii_case("available") {
            located.available = Some(index);
        } else if header.eq_ignore_ascii_case("allergens") {
            located.allergens = Some(index);
        }
    }

    located
}

fn parse_menu_csv<R: Read>(reader: R, restaurant_id: i32) -> MenuFormResult<Vec<NewMenuItem>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let located = locate_menu_headers(&headers);

    let (Some(name_index), Some(price_index)) = (located.name, located.price) else {
        return Err(MenuFormError::MissingRequiredHeaders);
    };

    let mut items = Vec::new();

    for (index, row) in csv_reader.records().enumerate() {
        let row_number = index + 2; // account for header row
        let record = row?;

        let sanitized_name = sanitize_inline_text(record.get(name_index).unwrap_or(""));
        if sanitized_name.is_empty() {
            return Err(MenuFormError::UploadMissingName { row: row_number });
        }

        let price_raw = record.get(price_index).unwrap_or("").trim();
        if price_raw.is_empty() {
            return Err(MenuFormError::UploadMissingPrice { row: row_number });
        }
        let Some(price_cents) = parse_price_cents(price_raw) else {
            return Err(MenuFormError::UploadInvalidPrice {
                row: row_number,
                value: price_raw.to_string(),
            });
        };

        let mut item = NewMenuItem::new(restaurant_id, sanitized_name, price_cents);

        if let Some(description) = located
            .description
            .and_then(|idx| record.get(idx))
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty())
        {
            item = item.with_description(description);
        }

        if let Some(category) = located
            .category
            .and_then(|idx| record.get(idx))
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty())
        {
            item = item.with_category(category);
        }

        if let Some(available) = located
            .available
            .and_then(|idx| record.get(idx))
            .and_then(parse_available)
        {
            item = item.with_available(available);
        }

        if let Some(raw) = located.allergens.and_then(|idx| record.get(idx)) {
            let allergens =
                sanitize_allergens(raw.split(';').map(str::to_string).collect());
            if !allergens.is_empty() {
                item = item.with_allergens(allergens);
            }
        }

        items.push(item);
    }

    if items.is_empty() {
        return Err(MenuFormError::EmptyUpload);
    }

    Ok(items)
}

/// Parse a decimal amount like `12.50` (or `12,50`) into cents.
fn parse_price_cents(raw: &str) -> Option<i32> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() || normalized.starts_with('-') {
        return None;
    }

    let (units, fraction) = match normalized.split_once('.') {
        Some((units, fraction)) => (units, fraction),
        None => (normalized.as_str(), ""),
    };

    if fraction.len() > 2 || !fraction.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    let units: i32 = units.parse().ok()?;
    let fraction_cents = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i32>().ok()? * 10,
        _ => fraction.parse::<i32>().ok()?,
    };

    units.checked_mul(100)?.checked_add(fraction_cents)
}

fn parse_available(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "si" | "sì" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn sanitize_allergens(allergens: Vec<String>) -> Vec<String> {
    allergens
        .into_iter()
        .map(|allergen| sanitize_inline_text(&allergen))
        .filter(|allergen| !allergen.is_empty())
        .collect()
}

fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(|line| sanitize_inline_text(line)).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Seek, SeekFrom, Write};

    use actix_multipart::form::tempfile::TempFile;
    use tempfile::NamedTempFile;

    fn build_upload_form(csv: &str) -> UploadMenuForm {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(csv.as_bytes()).expect("write csv file");
        file.as_file_mut()
            .seek(SeekFrom::Start(0))
            .expect("seek to start");

        UploadMenuForm {
            csv: TempFile {
                file,
                content_type: None,
                file_name: Some("menu.csv".to_string()),
                size: csv.len(),
            },
        }
    }

    #[test]
    fn add_form_sanitizes_and_converts() {
        let form = AddMenuItemForm {
            name: "  Spaghetti  alla  Carbonara ".to_string(),
            description: Some(" Uova, guanciale, pecorino. ".to_string()),
            category: Some("Primi".to_string()),
            price_cents: 1400,
            image_url: None,
            available: None,
            allergens: Some(vec!["glutine".to_string(), "  ".to_string()]),
        };

        let item = form.into_new_menu_item(3).expect("conversion succeeds");

        assert_eq!(item.restaurant_id, 3);
        assert_eq!(item.name, "Spaghetti alla Carbonara");
        assert_eq!(item.price_cents, 1400);
        assert!(item.available);
        assert_eq!(item.allergens, vec!["glutine".to_string()]);
    }

    #[test]
    fn add_form_rejects_negative_price() {
        let form = AddMenuItemForm {
            name: "Tiramisù".to_string(),
            description: None,
            category: None,
            price_cents: -100,
            image_url: None,
            available: None,
            allergens: None,
        };

        let result = form.into_new_menu_item(3);
        assert!(matches!(result, Err(MenuFormError::Validation(_))));
    }

    #[test]
    fn edit_form_distinguishes_clear_from_skip() {
        let form = EditMenuItemForm {
            name: None,
            description: Some("".to_string()),
            category: None,
            price_cents: Some(990),
            image_url: None,
            available: Some(false),
            allergens: None,
        };

        let updates = form.into_update_menu_item().expect("conversion succeeds");

        assert!(updates.name.is_none());
        assert_eq!(updates.description, Some(None));
        assert!(updates.category.is_none());
        assert_eq!(updates.price_cents, Some(990));
        assert_eq!(updates.available, Some(false));
    }

    #[test]
    fn price_parsing_handles_decimal_forms() {
        assert_eq!(parse_price_cents("12.50"), Some(1250));
        assert_eq!(parse_price_cents("12,50"), Some(1250));
        assert_eq!(parse_price_cents("12.5"), Some(1250));
        assert_eq!(parse_price_cents("12"), Some(1200));
        assert_eq!(parse_price_cents("0.05"), Some(5));
        assert_eq!(parse_price_cents("-3"), None);
        assert_eq!(parse_price_cents("1.234"), None);
        assert_eq!(parse_price_cents("abc"), None);
    }

    #[test]
    fn csv_parses_menu_rows() {
        let data = "name,category,price,available,allergens\n\
                    Spaghetti alla Carbonara,Primi,14.00,true,glutine;uova\n\
                    Tiramisù,Dolci,6.5,,\n";

        let items = parse_menu_csv(Cursor::new(data), 3).expect("parse succeeds");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Spaghetti alla Carbonara");
        assert_eq!(items[0].price_cents, 1400);
        assert_eq!(
            items[0].allergens,
            vec!["glutine".to_string(), "uova".to_string()]
        );
        assert_eq!(items[1].price_cents, 650);
        assert!(items[1].available);
    }

    #[test]
    fn csv_rejects_missing_price_header() {
        let data = "name,category\nTiramisù,Dolci\n";

        let result = parse_menu_csv(Cursor::new(data), 3);
        assert!(matches!(result, Err(MenuFormError::MissingRequiredHeaders)));
    }

    #[test]
    fn csv_rejects_invalid_price() {
        let data = "name,price\nTiramisù,free\n";

        let result = parse_menu_csv(Cursor::new(data), 3);
        assert!(matches!(
            result,
            Err(MenuFormError::UploadInvalidPrice { row: 2, .. })
        ));
    }

    #[test]
    fn csv_rejects_empty_upload() {
        let data = "name,price\n";

        let result = parse_menu_csv(Cursor::new(data), 3);
        assert!(matches!(result, Err(MenuFormError::EmptyUpload)));
    }

    #[test]
    fn upload_form_converts_rows() {
        let mut form = build_upload_form("name,price\nBruschetta,5.00\nMargherita,8\n");

        let items = form
            .into_new_menu_items(10)
            .expect("expected upload to succeed");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Bruschetta");
        assert_eq!(items[0].restaurant_id, 10);
        assert_eq!(items[1].price_cents, 800);
    }

    #[test]
    fn upload_form_can_be_parsed_twice() {
        let mut form = build_upload_form("name,price\nTiramisù,6.50\n");

        let first = form.into_new_menu_items(3).expect("first parse succeeds");
        let second = form.into_new_menu_items(3).expect("second parse succeeds");

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].price_cents, 650);
    }
}
