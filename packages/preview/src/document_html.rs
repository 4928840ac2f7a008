use resume_document::Document;

use crate::context::{Context, RenderOptions};
use crate::projection::{project, ItemView, PreviewModel, SectionView};

/// Render the editor preview. Sections carry `data-section-id` so a click
/// can be mapped back to the section it landed on.
pub fn render_document(document: &Document, options: RenderOptions) -> String {
    let model = project(document);
    let mut ctx = Context::new(options);

    let root_style = format!(
        "background-color: {}; color: {}",
        model.theme.background_color, model.theme.text_color
    );
    ctx.open("div", &[("id", "resume-preview"), ("style", root_style.as_str())]);

    render_image(&model, &mut ctx);
    for section in &model.sections {
        render_section(section, &mut ctx);
    }

    ctx.close("div");
    ctx.get_output()
}

fn render_image(model: &PreviewModel, ctx: &mut Context) {
    let Some(src) = &model.profile_image else {
        return;
    };

    let row_style = format!("display: flex; justify-content: {}", model.image_position.as_css());
    ctx.open("div", &[("class", "profile-image"), ("style", row_style.as_str())]);
    ctx.void("img", &[("src", src.as_str()), ("alt", "Personal Image")]);
    ctx.close("div");
}

fn render_section(section: &SectionView, ctx: &mut Context) {
    ctx.open(
        "section",
        &[("data-section-id", section.id.as_str()), ("data-section-type", section.kind.as_str())],
    );
    ctx.element("h2", &[("style", section.heading_css.as_str())], &section.title);

    for item in &section.items {
        render_item(item, ctx);
    }

    ctx.close("section");
}

fn render_item(item: &ItemView, ctx: &mut Context) {
    ctx.open("div", &[("class", "item"), ("data-item-id", item.id.as_str())]);

    ctx.open("div", &[("class", "item-header")]);
    ctx.element("h3", &[("style", item.title_css.as_str())], &item.title);
    if let Some(dates) = &item.date_text {
        ctx.element("span", &[("style", item.date_css.as_str())], dates);
    }
    ctx.close("div");

    if let Some(subheading) = &item.subheading {
        ctx.element("h4", &[("style", item.subheading_css.as_str())], subheading);
    }

    let details_style = format!("{}; white-space: pre-wrap", item.details_css);
    ctx.element("p", &[("style", details_style.as_str())], &item.details);

    ctx.close("div");
}
