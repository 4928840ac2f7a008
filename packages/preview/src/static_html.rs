use resume_document::format_short_month_year;
use resume_form::SubmittedResume;

use crate::context::{Context, RenderOptions};

/// Render the form-flow resume (`#resume`) from a validated submission
pub fn render_static(resume: &SubmittedResume, options: RenderOptions) -> String {
    let mut ctx = Context::new(options);
    ctx.open("div", &[("id", "resume")]);

    render_header(resume, &mut ctx);

    if let Some(summary) = &resume.summary {
        ctx.open("section", &[("class", "summary")]);
        ctx.element("h3", &[], "Professional Summary");
        ctx.element("p", &[("style", "white-space: pre-wrap")], summary);
        ctx.close("section");
    }

    ctx.open("section", &[("class", "experience")]);
    ctx.element("h3", &[], "Professional Experience");
    for exp in &resume.experience {
        ctx.open("div", &[("class", "entry")]);
        ctx.element("h4", &[], &exp.position);
        ctx.element("p", &[("class", "company")], &exp.company);
        let end = exp
            .end_date
            .map(format_short_month_year)
            .unwrap_or_else(|| "Present".to_string());
        let dates = format!("{} - {}", format_short_month_year(exp.start_date), end);
        ctx.element("p", &[("class", "dates")], &dates);

        let lines: Vec<&str> = exp.description_lines().collect();
        if !lines.is_empty() {
            ctx.open("ul", &[]);
            for line in lines {
                ctx.element("li", &[], line);
            }
            ctx.close("ul");
        }
        ctx.close("div");
    }
    ctx.close("section");

    ctx.open("section", &[("class", "education")]);
    ctx.element("h3", &[], "Education");
    for edu in &resume.education {
        ctx.open("div", &[("class", "entry")]);
        ctx.element("p", &[("class", "degree")], &edu.degree);
        ctx.element("p", &[("class", "institution")], &edu.institution);
        let dates = format!(
            "{} - {}",
            format_short_month_year(edu.start_date),
            format_short_month_year(edu.end_date)
        );
        ctx.element("p", &[("class", "dates")], &dates);
        ctx.close("div");
    }
    ctx.close("section");

    if !resume.skills.is_empty() {
        ctx.open("section", &[("class", "skills")]);
        ctx.element("h3", &[], "Technical Skills");
        ctx.open("div", &[("class", "chips")]);
        for skill in &resume.skills {
            ctx.element("span", &[("class", "chip")], skill);
        }
        ctx.close("div");
        ctx.close("section");
    }

    render_list("certifications", "Certifications", &resume.certifications, &mut ctx);
    render_list("languages", "Languages", &resume.languages, &mut ctx);
    render_links(resume, &mut ctx);

    ctx.close("div");
    ctx.get_output()
}

fn render_header(resume: &SubmittedResume, ctx: &mut Context) {
    ctx.open("header", &[]);
    ctx.open("div", &[("class", "identity")]);
    ctx.element("h2", &[], &resume.full_name);
    ctx.element("p", &[], &resume.email);
    for line in [&resume.address, &resume.phone_number].into_iter().flatten() {
        ctx.element("p", &[], line);
    }
    ctx.close("div");

    if let Some(src) = &resume.profile_image {
        ctx.void("img", &[("class", "avatar"), ("src", src.as_str()), ("alt", resume.full_name.as_str())]);
    }
    ctx.close("header");
}

fn render_list(class: &str, title: &str, entries: &[String], ctx: &mut Context) {
    if entries.is_empty() {
        return;
    }
    ctx.open("section", &[("class", class)]);
    ctx.element("h3", &[], title);
    ctx.open("ul", &[]);
    for entry in entries {
        ctx.element("li", &[], entry);
    }
    ctx.close("ul");
    ctx.close("section");
}

/// Only absolute http(s) URLs become anchors
fn is_web_link(href: &str) -> bool {
    let href = href.trim().to_ascii_lowercase();
    href.starts_with("http://") || href.starts_with("https://")
}

fn render_links(resume: &SubmittedResume, ctx: &mut Context) {
    let links: Vec<(&str, &str)> = [
        (&resume.linkedin_link, "LinkedIn Profile"),
        (&resume.github_link, "GitHub Profile"),
        (&resume.portfolio_link, "Portfolio"),
    ]
    .into_iter()
    .filter_map(|(href, label)| href.as_deref().map(|href| (href.trim(), label)))
    .filter(|(href, _)| is_web_link(href))
    .collect();
    if links.is_empty() {
        return;
    }

    ctx.open("footer", &[("class", "links")]);
    for (href, label) in links {
        ctx.element(
            "a",
            &[("href", href), ("target", "_blank"), ("rel", "noopener noreferrer")],
            label,
        );
    }
    ctx.close("footer");
}
