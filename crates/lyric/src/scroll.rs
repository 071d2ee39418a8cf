/// Geometry of one rendered line inside the scroll container, in the
/// container's own coordinate space (offsets include any scrolled-away
/// content above).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGeometry {
    pub top: f64,
    pub height: f64,
}

/// Scroll offset that centers `line` vertically in a container of
/// `container_height`. Lines near the top of the list clamp to 0 rather than
/// producing a negative offset.
pub fn scroll_target(container_height: f64, line: LineGeometry) -> f64 {
    (line.top - container_height / 2.0 + line.height / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_line_in_container() {
        let line = LineGeometry {
            top: 400.0,
            height: 40.0,
        };
        assert_eq!(scroll_target(300.0, line), 400.0 - 150.0 + 20.0);
    }

    #[test]
    fn top_lines_clamp_to_zero() {
        let line = LineGeometry {
            top: 10.0,
            height: 40.0,
        };
        assert_eq!(scroll_target(300.0, line), 0.0);
    }

    #[test]
    fn line_already_centered_needs_no_scroll_delta() {
        // A line whose center sits exactly at container_height/2 + offset
        let line = LineGeometry {
            top: 130.0,
            height: 40.0,
        };
        assert_eq!(scroll_target(300.0, line), 0.0);
    }
}
