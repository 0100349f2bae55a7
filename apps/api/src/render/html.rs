//! Standalone HTML writer. Consumes a `RenderPlan`; makes no gating decisions.

use crate::models::template::LayoutKind;
use crate::models::{ResumeDocument, SectionId};
use crate::render::contract::{RenderPlan, Theme};
use crate::render::layouts::HeaderStyle;

/// Escapes text for element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped text with line breaks kept.
fn multiline(text: &str) -> String {
    escape(text.trim()).replace('\n', "<br>")
}

fn external_href(link: &str) -> String {
    let link = link.trim();
    if link.starts_with("https://") || link.starts_with("http://") {
        escape(link)
    } else {
        format!("https://{}", escape(link))
    }
}

fn header_class(style: HeaderStyle) -> &'static str {
    match style {
        HeaderStyle::Centered => "header-centered",
        HeaderStyle::LeftAligned => "header-left",
        HeaderStyle::Band => "header-band",
        HeaderStyle::InSidebar => "header-sidebar",
    }
}

fn stylesheet(theme: &Theme) -> String {
    format!(
        r#"@page {{ size: A4; margin: 0; }}
:root {{ --accent: {accent}; }}
* {{ box-sizing: border-box; }}
body {{ margin: 0; font-family: {font}; color: #1f2937; font-size: 10.5pt; line-height: 1.45; }}
.resume {{ width: 210mm; min-height: 297mm; padding: 16mm 18mm; background: #fff; }}
.resume-header h1 {{ margin: 0; font-size: 24pt; color: var(--accent); }}
.resume-header .contact {{ margin: 4px 0 0; color: #4b5563; font-size: 9.5pt; }}
.header-centered .resume-header {{ text-align: center; border-bottom: 2px solid var(--accent); padding-bottom: 8px; }}
.header-band .resume-header {{ margin: -16mm -18mm 8mm; padding: 12mm 18mm; background: var(--accent); }}
.header-band .resume-header h1, .header-band .resume-header .contact {{ color: #fff; }}
.photo {{ width: 84px; height: 84px; border-radius: 50%; object-fit: cover; }}
.columns {{ display: flex; gap: 8mm; }}
.sidebar {{ flex: 0 0 32%; }}
.main-column {{ flex: 1; }}
.section {{ margin-top: 6mm; }}
.section h2 {{ margin: 0 0 2mm; font-size: 12pt; text-transform: uppercase; letter-spacing: 0.06em; color: var(--accent); }}
.entry {{ margin-bottom: 3mm; }}
.entry-head {{ display: flex; justify-content: space-between; gap: 4mm; }}
.entry h3 {{ margin: 0; font-size: 11pt; }}
.entry .dates {{ color: #6b7280; white-space: nowrap; }}
.entry-sub, .description {{ margin: 1mm 0 0; }}
.skills {{ margin: 0; padding-left: 4mm; }}
"#,
        accent = theme.accent_color,
        font = theme.font_stack,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Regions
// ────────────────────────────────────────────────────────────────────────────

fn write_header(out: &mut String, doc: &ResumeDocument, plan: &RenderPlan) {
    let info = &doc.personal_info;
    out.push_str("<header class=\"resume-header\">");
    if plan.show_photo {
        if let Some(photo) = info.photo.as_deref().filter(|p| p.starts_with("data:image/")) {
            out.push_str(&format!(
                "<img class=\"photo\" src=\"{}\" alt=\"\">",
                escape(photo)
            ));
        }
    }
    out.push_str(&format!("<h1>{}</h1>", escape(info.full_name.trim())));
    let contacts: Vec<String> = info.contact_line().into_iter().map(escape).collect();
    out.push_str(&format!("<p class=\"contact\">{}</p>", contacts.join(" · ")));
    out.push_str("</header>");
}

fn write_section(out: &mut String, section: SectionId, doc: &ResumeDocument) {
    out.push_str(&format!(
        "<section class=\"section section-{}\"><h2>{}</h2>",
        section.as_str(),
        escape(section.heading())
    ));
    match section {
        SectionId::Summary => {
            out.push_str(&format!("<p>{}</p>", multiline(&doc.summary)));
        }
        SectionId::Hobbies => {
            out.push_str(&format!("<p>{}</p>", multiline(&doc.hobbies)));
        }
        SectionId::Experience => {
            for e in &doc.experience {
                out.push_str(&format!(
                    "<div class=\"entry\"><div class=\"entry-head\"><h3>{}</h3><span class=\"dates\">{}</span></div>",
                    escape(e.title.trim()),
                    escape(&e.date_range())
                ));
                let sub: Vec<String> = [e.company.trim(), e.location.trim()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .map(escape)
                    .collect();
                out.push_str(&format!("<p class=\"entry-sub\">{}</p>", sub.join(" · ")));
                out.push_str(&format!(
                    "<p class=\"description\">{}</p></div>",
                    multiline(&e.description)
                ));
            }
        }
        SectionId::Education => {
            for e in &doc.education {
                let sub: Vec<String> = [e.school.trim(), e.city.trim()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .map(escape)
                    .collect();
                out.push_str(&format!(
                    "<div class=\"entry\"><div class=\"entry-head\"><h3>{}</h3><span class=\"dates\">{}</span></div><p class=\"entry-sub\">{}</p></div>",
                    escape(e.degree.trim()),
                    escape(e.year.trim()),
                    sub.join(" · ")
                ));
            }
        }
        SectionId::Projects => {
            for p in &doc.projects {
                out.push_str(&format!(
                    "<div class=\"entry\"><div class=\"entry-head\"><h3>{}</h3>",
                    escape(p.title.trim())
                ));
                if !p.link.trim().is_empty() {
                    out.push_str(&format!(
                        "<a class=\"dates\" href=\"{}\">{}</a>",
                        external_href(&p.link),
                        escape(p.link.trim())
                    ));
                }
                out.push_str(&format!(
                    "</div><p class=\"description\">{}</p></div>",
                    multiline(&p.description)
                ));
            }
        }
        SectionId::Skills => {
            out.push_str("<ul class=\"skills\">");
            for skill in doc.skills.iter() {
                out.push_str(&format!("<li>{}</li>", escape(skill)));
            }
            out.push_str("</ul>");
        }
    }
    out.push_str("</section>");
}

fn write_sections(out: &mut String, sections: &[SectionId], doc: &ResumeDocument) {
    for section in sections {
        write_section(out, *section, doc);
    }
}

/// Renders a complete HTML5 document for `doc` laid out by `plan`.
pub fn render_document(doc: &ResumeDocument, plan: &RenderPlan) -> String {
    let mut out = String::with_capacity(8 * 1024);
    let title = match doc.personal_info.full_name.trim() {
        "" => "Resume".to_string(),
        name => format!("{} - Resume", escape(name)),
    };
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(&format!("<style>\n{}</style>\n", stylesheet(&plan.theme)));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!(
        "<main class=\"resume template-{} {}\">",
        plan.template.as_str(),
        header_class(plan.header_style)
    ));

    let header_in_sidebar = plan.header_style == HeaderStyle::InSidebar;
    match plan.columns {
        LayoutKind::SingleColumn => {
            write_header(&mut out, doc, plan);
            write_sections(&mut out, &plan.main, doc);
        }
        LayoutKind::TwoColumn => {
            if !header_in_sidebar {
                write_header(&mut out, doc, plan);
            }
            out.push_str("<div class=\"columns\"><aside class=\"sidebar\">");
            if header_in_sidebar {
                write_header(&mut out, doc, plan);
            }
            write_sections(&mut out, &plan.sidebar, doc);
            out.push_str("</aside><div class=\"main-column\">");
            write_sections(&mut out, &plan.main, doc);
            out.push_str("</div></div>");
        }
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}
