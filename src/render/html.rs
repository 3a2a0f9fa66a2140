use std::fmt;

use crate::triangle::Pascal;

const CENTRAL_COLUMN: &str = "central-column";
const BIGGEST_NUMBER: &str = "biggest-number";

const STYLE: &str = r#"<style>
	table {
		empty-cells: show;
	}
	table, td, th {
		text-align: right;
		font-size: 9px;
	}
</style>
"#;

/// Standalone HTML page holding the triangle as a table.
pub struct Html<'a> {
    pascal: &'a Pascal,
    headers: bool,
}

impl<'a> Html<'a> {
    pub fn new(pascal: &'a Pascal, headers: bool) -> Self {
        Self { pascal, headers }
    }
}

impl fmt::Display for Html<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.pascal.depth();
        let max = self.pascal.max();
        let biggest = max.to_string();

        write!(
            f,
            r##"
<!DOCTYPE html>
<html>
<body>
<h1>Pascal triangle of depth {depth}</h1>
<nav>
	<ul>
		<li><a href="#{CENTRAL_COLUMN}">Central column</a></li>
		<li><a href="#{BIGGEST_NUMBER}">Biggest number</a></li>
	</ul>
</nav>
<p>Biggest number is {biggest}.</p>
<p>It has {} digits.</p>
"##,
            biggest.len()
        )?;
        f.write_str(STYLE)?;
        f.write_str("<table><tbody>\n")?;

        for (position, row) in self.pascal.rows().iter().enumerate() {
            f.write_str("<tr>")?;
            if self.headers {
                write!(f, r#"<th scope="row">{}</th>"#, row.index)?;
            }

            let lead = depth - row.index;
            f.write_str(&"<td></td>".repeat(lead))?;
            for value in &row.values {
                if position == 0 {
                    write!(f, r#"<td id="{CENTRAL_COLUMN}">{value}</td><td></td>"#)?;
                } else if value == max {
                    write!(
                        f,
                        r#"<td id="{BIGGEST_NUMBER}" style="color: red;">{value}</td><td></td>"#
                    )?;
                } else {
                    write!(f, "<td>{value}</td><td></td>")?;
                }
            }
            writeln!(f, "{}</tr>", "<td></td>".repeat(2 * depth + 1 - lead))?;
        }

        f.write_str("</tbody>\n</table>\n</body>\n</html>")
    }
}
