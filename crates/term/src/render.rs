use rolock_indicator::Indicator;

/// One-line rendering of the indicator for terminal output.
pub fn indicator_line(indicator: &Indicator) -> String {
	if indicator.is_disposed() {
		return "[disposed]".to_string();
	}
	if !indicator.is_visible() {
		return "[hidden]".to_string();
	}
	format!("[{}] -- {}", indicator.text(), indicator.tooltip())
}
