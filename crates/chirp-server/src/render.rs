use chirp_db::models::Chirp;

/// Renders the full index page: the post form followed by every chirp,
/// newest first, each with its upvote/downvote forms. Pure function of the
/// chirp list.
pub fn render_index(chirps: &[Chirp]) -> String {
    let mut html = String::new();
    html.push_str("<html><head><title>Chirps Index</title></head>");
    html.push_str("<body>");

    html.push_str("<h1>What's on your mind?</h1>");
    html.push_str("<form action=\"/addChirp\" method=\"post\">");
    html.push_str("<input type=\"text\" name=\"text\" required>");
    html.push_str("<input type=\"submit\" value=\"Submit\">");
    html.push_str("</form>");

    html.push_str("<h1>CHIRPS</h1>");
    html.push_str("<ul>");
    for chirp in chirps {
        html.push_str("<li>");
        html.push_str(&format!("{} -- {}<br>", chirp.id, chirp.text.to_uppercase()));
        html.push_str(&format!("Upvotes: {}", chirp.votes));
        html.push_str(&vote_form("/upvote", "Upvote", chirp.id));
        html.push_str(&vote_form("/downvote", "Downvote", chirp.id));
        html.push_str("</li>");
    }
    html.push_str("</ul>");

    html.push_str("</body></html>");
    html
}

fn vote_form(action: &str, label: &str, id: i64) -> String {
    format!(
        "<form action=\"{}\" method=\"post\">\
         <input type=\"hidden\" name=\"id\" value=\"{}\">\
         <input type=\"submit\" value=\"{}\">\
         </form>",
        action, id, label
    )
}
