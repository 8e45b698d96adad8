//! Server-side HTML rendering.
//!
//! Deliberately plain string templates; the pages are small enough that a
//! template engine would not pay for itself. Every render takes an explicit
//! [`PageContext`] built by the handler -- there is no ambient request
//! state.

use atelier_core::category::{classify, Category};
use atelier_db::models::project::Project;

/// Per-request context passed to every render.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Request path, used to mark the active nav entry.
    pub current_path: String,
}

impl PageContext {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
        }
    }
}

/// Listing card: a project row joined with its classified category.
#[derive(Debug)]
pub struct ProjectCard {
    pub id: i64,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<Category>,
}

impl From<&Project> for ProjectCard {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id,
            name: p.project_name.clone(),
            thumbnail: p.thumbnail.clone(),
            category: classify(p.type_code),
        }
    }
}

/// Escape text for HTML body and attribute positions.
fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

fn nav_link(ctx: &PageContext, href: &str, label: &str) -> String {
    let class = if ctx.current_path == href {
        " class=\"active\""
    } else {
        ""
    };
    format!("<a href=\"{href}\"{class}>{label}</a>")
}

fn layout(ctx: &PageContext, title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | Atelier</title>\n</head>\n<body>\n<nav>{home}{portfolio}</nav>\n\
         <main>\n{body}\n</main>\n</body>\n</html>\n",
        title = esc(title),
        home = nav_link(ctx, "/", "Home"),
        portfolio = nav_link(ctx, "/portfolio", "Portfolio"),
    )
}

fn card_html(card: &ProjectCard, detail_prefix: &str) -> String {
    let (type_name, type_class) = match card.category {
        Some(c) => (c.label, c.css_class),
        // Unknown codes render unmapped, never fail the page.
        None => ("", ""),
    };
    let thumb = card
        .thumbnail
        .as_deref()
        .map(|t| format!("<img src=\"/uploads/{}\" alt=\"{}\">", esc(t), esc(&card.name)))
        .unwrap_or_default();
    format!(
        "<article class=\"project {type_class}\">{thumb}\
         <h3><a href=\"{detail_prefix}/{id}\">{name}</a></h3>\
         <span class=\"type\">{type_name}</span></article>",
        id = card.id,
        name = esc(&card.name),
    )
}

pub fn home_page(ctx: &PageContext, cards: &[ProjectCard]) -> String {
    let items: String = cards.iter().map(|c| card_html(c, "/single_project")).collect();
    layout(ctx, "Home", &format!("<h1>Atelier</h1><section class=\"projects\">{items}</section>"))
}

pub fn portfolio_page(ctx: &PageContext, cards: &[ProjectCard]) -> String {
    let items: String = cards.iter().map(|c| card_html(c, "/single_project")).collect();
    layout(
        ctx,
        "Portfolio",
        &format!("<h1>Portfolio</h1><section class=\"projects\">{items}</section>"),
    )
}

pub fn project_detail_page(ctx: &PageContext, project: &Project) -> String {
    let category = classify(project.type_code);
    let type_name = category.map(|c| c.label).unwrap_or_default();
    let description = project
        .description
        .as_deref()
        .map(|d| format!("<p>{}</p>", esc(d)))
        .unwrap_or_default();
    let gallery: String = project
        .gallery()
        .iter()
        .map(|g| format!("<img src=\"/uploads/{}\" alt=\"\">", esc(g)))
        .collect();
    layout(
        ctx,
        &project.project_name,
        &format!(
            "<h1>{name}</h1><span class=\"type\">{type_name}</span>{description}\
             <section class=\"gallery\">{gallery}</section>",
            name = esc(&project.project_name),
        ),
    )
}

pub fn admin_index_page(ctx: &PageContext) -> String {
    layout(
        ctx,
        "Admin",
        "<h1>Admin</h1>\
         <p><a href=\"/admin/portfolio\">Manage portfolio</a></p>\
         <form action=\"/addproject\" method=\"post\" enctype=\"multipart/form-data\">\
         <select name=\"type\">\
         <option value=\"1\">Residential</option>\
         <option value=\"2\">Commercial</option>\
         <option value=\"3\">Independent Bungalows / Villa</option>\
         <option value=\"4\">School</option>\
         <option value=\"5\">Interior Design</option>\
         </select>\
         <input name=\"projectName\" placeholder=\"Project name\">\
         <textarea name=\"description\"></textarea>\
         <input type=\"file\" name=\"thumbnail\">\
         <button type=\"submit\">Add project</button>\
         </form>",
    )
}

pub fn admin_portfolio_page(ctx: &PageContext, cards: &[ProjectCard]) -> String {
    let items: String = cards
        .iter()
        .map(|c| {
            format!(
                "{card}<form action=\"/admin/delete-project/{id}\" method=\"post\">\
                 <button type=\"submit\">Delete</button></form>",
                card = card_html(c, "/admin/single_project"),
                id = c.id,
            )
        })
        .collect();
    layout(
        ctx,
        "Admin Portfolio",
        &format!("<h1>Admin Portfolio</h1><section class=\"projects\">{items}</section>"),
    )
}

pub fn admin_project_page(ctx: &PageContext, project: &Project) -> String {
    let gallery: String = project
        .gallery()
        .iter()
        .map(|g| {
            format!(
                "<label><input type=\"checkbox\" name=\"images\" value=\"{v}\">\
                 <img src=\"/uploads/{v}\" alt=\"\"></label>",
                v = esc(g),
            )
        })
        .collect();
    layout(
        ctx,
        &project.project_name,
        &format!(
            "<h1>{name}</h1>\
             <p><a href=\"/admin/single_project/{id}/add_details\">Add gallery images</a></p>\
             <form action=\"/admin/projects/{id}/delete-images\" method=\"post\">\
             {gallery}<button type=\"submit\">Delete selected</button></form>",
            name = esc(&project.project_name),
            id = project.id,
        ),
    )
}

pub fn add_details_page(ctx: &PageContext, project: &Project) -> String {
    layout(
        ctx,
        &project.project_name,
        &format!(
            "<h1>Add images: {name}</h1>\
             <form action=\"/admin/add_details/{id}\" method=\"post\" enctype=\"multipart/form-data\">\
             <input type=\"file\" name=\"images\" multiple>\
             <button type=\"submit\">Upload</button></form>",
            name = esc(&project.project_name),
            id = project.id,
        ),
    )
}

pub fn login_page(ctx: &PageContext) -> String {
    layout(
        ctx,
        "Admin Login",
        "<h1>Login</h1>\
         <form action=\"/login-submit\" method=\"post\">\
         <input name=\"username\" placeholder=\"Email\">\
         <input type=\"password\" name=\"password\" placeholder=\"Password\">\
         <button type=\"submit\">Sign in</button></form>",
    )
}
