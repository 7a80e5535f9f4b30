
/// Wraps feature elements in a minimal live bulletin.
pub(crate) fn bulletin(dist_name: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<tcWarning xmlns:gml="http://www.opengis.net/gml">
  <distId>IDQ65001</distId>
  <distName>{dist_name}</distName>
  <issueTimeABC>4:52 am AEST Wednesday 5 March 2025</issueTimeABC>
  <fcastTime>2025-03-04T18:00:00Z</fcastTime>
  <expiryHrs>6</expiryHrs>
{body}
</tcWarning>"#
    )
}

/// A live fix element (wrapped in `<geometry>`).
pub(crate) fn fix(fix_type: &str, time: &str, symbol: &str, category: &str, coords: &str) -> String {
    format!(
        r#"  <tcFix>
    <fixType>{fix_type}</fixType>
    <fixTime>{time}</fixTime>
    <symbol>{symbol}</symbol>
    <category>{category}</category>
    <geometry><gml:Point><gml:coordinates>{coords}</gml:coordinates></gml:Point></geometry>
  </tcFix>"#
    )
}
