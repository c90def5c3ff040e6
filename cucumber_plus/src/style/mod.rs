//! Export configuration values and the style derived from them.
//!
//! [`ConfigDto`] is what the resolver assembles from the configuration
//! folders. [`ConfigDto::build_styles`] turns it into the [`PdfStyle`]
//! handed to the renderer, replacing every `now()` token with the current
//! date.

mod date;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::ConfigResult;

pub use date::DatePattern;

/// Placeholder replaced by the formatted current date.
pub const NOW_TOKEN: &str = "now()";

/// Font size applied to the document body.
pub const BODY_FONT_SIZE: &str = "25px";

/// Property keys recognised in `.properties` files, in declaration order.
pub const PROPERTY_KEYS: [&str; 9] = [
    "topLeft",
    "topCenter",
    "topRight",
    "topFontSize",
    "bottomLeft",
    "bottomCenter",
    "bottomRight",
    "bottomFontSize",
    "dateFormat",
];

/// Resolved export configuration.
///
/// Every property missing from all configuration layers is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigDto {
    /// Header text, left aligned.
    pub top_left: String,
    /// Header text, centred.
    pub top_center: String,
    /// Header text, right aligned.
    pub top_right: String,
    /// Header font size, e.g. `12px`.
    pub top_font_size: String,
    /// Footer text, left aligned.
    pub bottom_left: String,
    /// Footer text, centred.
    pub bottom_center: String,
    /// Footer text, right aligned.
    pub bottom_right: String,
    /// Footer font size.
    pub bottom_font_size: String,
    /// Pattern used to format `now()`.
    pub date_format: String,
    /// Stylesheet applied to the exported content.
    #[serde(skip_deserializing)]
    pub css: String,
}

/// Style handed to the document renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfStyle {
    /// Always [`BODY_FONT_SIZE`].
    pub body_font_size: String,
    /// Header font size.
    pub top_font_size: String,
    /// Footer font size.
    pub bottom_font_size: String,
    /// Header text, left aligned.
    pub top_left: String,
    /// Header text, centred.
    pub top_center: String,
    /// Header text, right aligned.
    pub top_right: String,
    /// Footer text, left aligned.
    pub bottom_left: String,
    /// Footer text, centred.
    pub bottom_center: String,
    /// Footer text, right aligned.
    pub bottom_right: String,
    /// Date pattern after substitution.
    pub date_format: String,
    /// Stylesheet, copied unchanged.
    pub content_style: String,
}

impl ConfigDto {
    /// Builds the renderer style using `now` for every `now()` token.
    ///
    /// The stylesheet is copied as is; every other field, including
    /// `date_format` itself, has the token replaced.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::DateFormat`] when `date_format` is not
    /// a supported pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use cucumber_plus::ConfigDto;
    ///
    /// # fn main() -> Result<(), std::sync::Arc<cucumber_plus::ConfigError>> {
    /// let config = ConfigDto {
    ///     bottom_left: "Printed now()".into(),
    ///     date_format: "dd/MM/yyyy".into(),
    ///     ..ConfigDto::default()
    /// };
    /// let now = NaiveDate::from_ymd_opt(2022, 1, 31)
    ///     .and_then(|date| date.and_hms_opt(0, 0, 0))
    ///     .unwrap_or_default();
    /// let style = config.build_styles(&now)?;
    /// assert_eq!(style.bottom_left, "Printed 31/01/2022");
    /// assert_eq!(style.body_font_size, "25px");
    /// # Ok(())
    /// # }
    /// ```
    pub fn build_styles(&self, now: &NaiveDateTime) -> ConfigResult<PdfStyle> {
        let today = DatePattern::parse(&self.date_format)?.format(now);
        let tune = |field: &str| field.replace(NOW_TOKEN, &today);
        Ok(PdfStyle {
            body_font_size: BODY_FONT_SIZE.to_owned(),
            top_font_size: tune(&self.top_font_size),
            bottom_font_size: tune(&self.bottom_font_size),
            top_left: tune(&self.top_left),
            top_center: tune(&self.top_center),
            top_right: tune(&self.top_right),
            bottom_left: tune(&self.bottom_left),
            bottom_center: tune(&self.bottom_center),
            bottom_right: tune(&self.bottom_right),
            date_format: tune(&self.date_format),
            content_style: self.css.clone(),
        })
    }

    /// [`Self::build_styles`] with the local wall-clock time.
    ///
    /// # Errors
    ///
    /// See [`Self::build_styles`].
    pub fn build_styles_now(&self) -> ConfigResult<PdfStyle> {
        self.build_styles(&Local::now().naive_local())
    }
}
