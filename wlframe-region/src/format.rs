//! Textual form of a region.
//!
//! ```text
//! {[x1,y1,w1,h1], [x2,y2,w2,h2], ...}
//! ```
//!
//! A nil region is `{}`. Components are printed with a fixed number of
//! decimals: [`DEFAULT_PRECISION`] unless the formatter carries one, clamped
//! to [`MAX_PRECISION`]. The parser accepts optional whitespace around every
//! token and nothing else. An absent region can be rendered as `(NULL)` with
//! [`wlframe_core::types::display_or_null`].
//!
//! [`DEFAULT_PRECISION`]: wlframe_core::types::DEFAULT_PRECISION
//! [`MAX_PRECISION`]: wlframe_core::types::MAX_PRECISION

use std::fmt;
use std::str::FromStr;

use wlframe_core::types::{clamp_precision, RectF, Scanner};

use crate::error::RegionError;
use crate::region::Region;

impl Region {
    /// Formats the region with `precision` decimals per component.
    ///
    /// ```
    /// use wlframe_core::types::RectF;
    /// use wlframe_region::Region;
    ///
    /// let region = Region::try_from(RectF::from_coords(0.0, 0.5, 10.0, 2.0)).unwrap();
    /// assert_eq!(region.to_string_with_precision(1), "{[0.0,0.5,10.0,2.0]}");
    /// assert_eq!(region.to_string(), "{[0.000,0.500,10.000,2.000]}");
    /// ```
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = clamp_precision(f.precision());
        f.write_str("{")?;
        for (i, r) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "[{:.*},{:.*},{:.*},{:.*}]",
                p,
                r.x(),
                p,
                r.y(),
                p,
                r.width(),
                p,
                r.height()
            )?;
        }
        f.write_str("}")
    }
}

impl FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_region(s).map_err(|e| {
            tracing::debug!(error = %e, "rejected region text");
            e
        })
    }
}

fn parse_region(s: &str) -> Result<Region, RegionError> {
    let mut scanner = Scanner::new(s);
    let mut region = Region::try_new()?;

    scanner.expect('{', "'{'")?;
    if !scanner.eat('}') {
        loop {
            let [x, y, width, height] = scanner.delimited::<f64, 4>('[', ']')?;
            region.add_rect(RectF::from_coords(x, y, width, height))?;
            if scanner.eat('}') {
                break;
            }
            scanner.expect(',', "',' or '}'")?;
        }
    }
    scanner.finish()?;
    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use wlframe_core::error::GeometryParseError;
    use wlframe_core::types::display_or_null;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> RectF {
        RectF::from_coords(x, y, w, h)
    }

    #[test]
    fn test_display_nil() {
        assert_eq!(Region::new().to_string(), "{}");
        assert_eq!(Region::new().to_string_with_precision(0), "{}");
    }

    #[test]
    fn test_display_separators() {
        let region = Region::try_from(vec![rect(1.0, 2.0, 3.0, 4.0), rect(-1.25, 0.25, 8.0, 16.0)]).unwrap();
        assert_eq!(
            region.to_string(),
            "{[1.000,2.000,3.000,4.000], [-1.250,0.250,8.000,16.000]}"
        );
        assert_eq!(region.to_string_with_precision(0), "{[1,2,3,4], [-1,0,8,16]}");
        assert_eq!(format!("{:.2}", region), "{[1.00,2.00,3.00,4.00], [-1.25,0.25,8.00,16.00]}");
    }

    #[test]
    fn test_display_precision_is_clamped() {
        let region = Region::try_from(rect(0.1, 0.0, 1.0, 1.0)).unwrap();
        assert_eq!(region.to_string_with_precision(40), region.to_string_with_precision(15));
    }

    #[test]
    fn test_display_absent_region() {
        assert_eq!(display_or_null::<Region>(None), "(NULL)");
        assert_eq!(display_or_null(Some(&Region::new())), "{}");
    }

    #[rstest]
    #[case("{}", 0)]
    #[case("  {  }  ", 0)]
    #[case("{[0,0,1,1]}", 1)]
    #[case("{ [ 0 , 0 , 1 , 1 ] , [2,2,1,1] }", 2)]
    #[case("{[0.5,-1e2,3,4],[5,6,7,8],[9,10,11,12]}", 3)]
    #[case("\n{[0,0,1,1],\n [2,2,1,1]}\n", 2)]
    fn test_parse_accepts(#[case] input: &str, #[case] len: usize) {
        let region: Region = input.parse().unwrap();
        assert_eq!(region.len(), len);
    }

    #[test]
    fn test_parse_values_and_extents() {
        let region: Region = "{[0.5,-1e2,3,4], [5,6,7,8]}".parse().unwrap();
        assert_eq!(region.rects(), &[rect(0.5, -100.0, 3.0, 4.0), rect(5.0, 6.0, 7.0, 8.0)]);
        assert_eq!(region.extents(), Some(rect(0.5, -100.0, 11.5, 114.0)));
    }

    #[rstest]
    #[case("")]
    #[case("[0,0,1,1]")] // missing braces
    #[case("{[0,0,1,1]")] // missing closing brace
    #[case("{0,0,1,1}")] // missing brackets
    #[case("{[0,0,1]}")] // missing component
    #[case("{[0,0,1,1,1]}")] // extra component
    #[case("{[0,0,a,1]}")]
    #[case("{[0,0,1.2.3,1]}")]
    #[case("{[0,0,1,1],}")] // trailing separator
    #[case("{[0,0,1,1] [1,1,1,1]}")] // missing separator
    #[case("{[0,0,1,1]} trailing")]
    #[case("{} {}")]
    #[case("(NULL)")]
    #[case("{[0,0,inf,1]}")]
    #[case("{[NaN,0,1,1]}")]
    fn test_parse_rejects(#[case] input: &str) {
        assert!(matches!(input.parse::<Region>(), Err(RegionError::Parse(_))));
    }

    #[rstest]
    #[case("{[1e400,0,1,1]}", "1e400", 2)]
    #[case("{[0,0,1,1], [0,0,-1e309,1]}", "-1e309", 17)]
    fn test_parse_rejects_overflowing_number(
        #[case] input: &str,
        #[case] token: &str,
        #[case] offset: usize,
    ) {
        assert_eq!(
            input.parse::<Region>(),
            Err(RegionError::Parse(GeometryParseError::InvalidNumber {
                text: token.to_string(),
                position: offset,
            }))
        );
    }

    #[test]
    fn test_extreme_finite_values_read_back() {
        let mut region = Region::new();
        region.add_rect(rect(-1e308, 0.0, 1e308, 1e-300)).unwrap();
        region.add_rect(rect(1e307, -1e308, 0.0, 1.0)).unwrap();
        let text = region.to_string();
        let back: Region = text.parse().unwrap();
        assert_eq!(back.len(), region.len());
        assert!(back.nearly_equal(&region, 1e-3));
    }

    #[test]
    fn test_parse_error_position() {
        match "{[0,0,100]}".parse::<Region>() {
            Err(RegionError::Parse(GeometryParseError::UnexpectedChar { found, position, .. })) => {
                assert_eq!(found, ']');
                assert_eq!(position, 9);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        match "{[0,0,100,100]} trailing".parse::<Region>() {
            Err(RegionError::Parse(GeometryParseError::TrailingInput { position })) => {
                assert_eq!(position, 16)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
