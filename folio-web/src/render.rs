//! Server-side rendering of the portfolio page
//!
//! Every section is built from [`SiteContent`]; the playlists section is
//! filled in by the browser from the playlists endpoint.

use folio_common::content::{GifItem, Profile, Project, StackCategory};
use folio_common::SiteContent;

use crate::PLAYLISTS_PATH;

/// Section anchors in page order, with their nav labels where they have one
pub const SECTIONS: [(&str, Option<&str>); 7] = [
    ("hero", Some("Home")),
    ("about", Some("About")),
    ("projects", Some("Projects")),
    ("playlists", None),
    ("music", Some("Music")),
    ("gifs", None),
    ("stack", Some("Stack")),
];

const STYLE: &str = r#"
        body {
            font-family: system-ui, -apple-system, sans-serif;
            margin: 0;
            line-height: 1.6;
            color: #222;
        }
        header {
            position: sticky;
            top: 0;
            background: #fff;
            border-bottom: 2px solid #ff6b35;
            padding: 10px 20px;
        }
        nav button {
            background: none;
            border: none;
            font-size: 1rem;
            cursor: pointer;
            margin-right: 10px;
        }
        section {
            max-width: 960px;
            margin: 0 auto;
            padding: 40px 20px;
        }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
            gap: 16px;
        }
        .group {
            border: 1px solid #ddd;
            border-radius: 6px;
            padding: 16px;
        }
        .featured {
            border-color: #ff6b35;
        }
        .badge {
            display: inline-block;
            background: #f5f5f5;
            border-radius: 4px;
            padding: 2px 8px;
            margin: 2px;
            font-size: 0.85rem;
        }
        figure img, .playlist img {
            max-width: 100%;
        }
        footer {
            text-align: center;
            padding: 20px;
            border-top: 1px solid #ddd;
        }
"#;

const SCRIPT: &str = r#"
    document.querySelectorAll('nav button[data-target]').forEach((button) => {
        button.addEventListener('click', () => {
            document.getElementById(button.dataset.target).scrollIntoView({ behavior: 'smooth' });
        });
    });

    const toggle = document.querySelector('button[aria-label="Toggle menu"]');
    toggle.addEventListener('click', () => {
        const open = toggle.getAttribute('aria-expanded') === 'true';
        toggle.setAttribute('aria-expanded', String(!open));
    });

    async function loadPlaylists() {
        const grid = document.getElementById('playlist-grid');
        try {
            const response = await fetch(grid.dataset.source);
            const playlists = await response.json();
            grid.textContent = '';
            for (const playlist of playlists) {
                const card = document.createElement('a');
                card.className = 'group playlist';
                card.href = playlist.spotifyUrl;
                card.target = '_blank';
                card.rel = 'noopener noreferrer';
                if (playlist.imageUrl) {
                    const img = document.createElement('img');
                    img.src = playlist.imageUrl;
                    img.alt = playlist.name;
                    card.appendChild(img);
                }
                const title = document.createElement('h3');
                title.textContent = playlist.name;
                const description = document.createElement('p');
                description.textContent = playlist.description;
                const count = document.createElement('small');
                count.textContent = playlist.trackCount + ' tracks';
                card.append(title, description, count);
                grid.appendChild(card);
            }
        } catch (err) {
            grid.textContent = 'Playlists are unavailable right now.';
        }
    }
    loadPlaylists();
"#;

/// Render the full page
pub fn render_page(content: &SiteContent) -> String {
    let profile = &content.profile;

    let mut body = String::new();
    body.push_str(&render_header(profile));
    body.push_str("<main>\n");
    body.push_str(&render_hero(profile));
    body.push_str(&render_about(profile));
    body.push_str(&render_projects(&content.projects));
    body.push_str(&render_playlists());
    body.push_str(&render_music(profile));
    body.push_str(&render_gifs(&content.gifs));
    body.push_str(&render_stack(&content.stack));
    body.push_str("</main>\n");
    body.push_str(&render_footer(profile));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} | {headline}</title>
    <style>{style}</style>
</head>
<body>
{body}<script>{script}</script>
</body>
</html>
"#,
        name = escape(&profile.name),
        headline = escape(&profile.headline),
        style = STYLE,
        body = body,
        script = SCRIPT,
    )
}

fn render_header(profile: &Profile) -> String {
    let buttons: String = SECTIONS
        .iter()
        .filter_map(|(id, label)| label.map(|label| (id, label)))
        .map(|(id, label)| format!(r#"<button type="button" data-target="{}">{}</button>"#, id, label))
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<header>
    <strong>{name}</strong>
    <button type="button" class="menu-toggle" aria-label="Toggle menu" aria-expanded="false">&#9776;</button>
    <nav>
        {buttons}
    </nav>
</header>
"#,
        name = escape(&profile.name),
        buttons = buttons,
    )
}

fn render_hero(profile: &Profile) -> String {
    format!(
        r#"<section id="hero">
    <p>{name}</p>
    <h1>{headline}</h1>
    <p>{tagline}</p>
</section>
"#,
        name = escape(&profile.name),
        headline = escape(&profile.headline),
        tagline = escape(&profile.tagline),
    )
}

fn render_about(profile: &Profile) -> String {
    let paragraphs: String = profile
        .about
        .iter()
        .map(|p| format!("    <p>{}</p>\n", escape(p)))
        .collect();

    format!(
        "<section id=\"about\">\n    <h2>About</h2>\n{}</section>\n",
        paragraphs
    )
}

fn render_project(project: &Project) -> String {
    let badges: String = project
        .tech_stack
        .iter()
        .map(|tech| format!(r#"<span class="badge">{}</span>"#, escape(tech)))
        .collect();
    let class = if project.featured { "group featured" } else { "group" };

    format!(
        r#"        <article class="{class}">
            <h3><a href="{url}" target="_blank" rel="noopener noreferrer">{name}</a></h3>
            <p>{description}</p>
            <div>{badges}</div>
        </article>
"#,
        class = class,
        url = escape(&project.github_url),
        name = escape(&project.name),
        description = escape(&project.description),
        badges = badges,
    )
}

fn render_projects(projects: &[Project]) -> String {
    let cards: String = projects.iter().map(render_project).collect();
    format!(
        "<section id=\"projects\">\n    <h2>Projects</h2>\n    <div class=\"grid\">\n{}    </div>\n</section>\n",
        cards
    )
}

fn render_playlists() -> String {
    format!(
        r#"<section id="playlists">
    <h2>Playlists</h2>
    <div class="grid" id="playlist-grid" data-source="{}">Loading playlists...</div>
</section>
"#,
        PLAYLISTS_PATH
    )
}

fn render_music(profile: &Profile) -> String {
    format!(
        r#"<section id="music">
    <h2>Music</h2>
    <iframe width="560" height="315" src="{}" title="YouTube video player" allow="autoplay; encrypted-media; picture-in-picture" allowfullscreen></iframe>
</section>
"#,
        escape(&profile.youtube_embed_url)
    )
}

fn render_gif(gif: &GifItem) -> String {
    format!(
        r#"        <figure class="group">
            <img src="{}" alt="{}" loading="lazy">
            <figcaption>{}</figcaption>
        </figure>
"#,
        escape(&gif.url),
        escape(&gif.alt),
        escape(&gif.caption)
    )
}

fn render_gifs(gifs: &[GifItem]) -> String {
    let figures: String = gifs.iter().map(render_gif).collect();
    format!(
        "<section id=\"gifs\">\n    <h2>GIFs</h2>\n    <div class=\"grid\">\n{}    </div>\n</section>\n",
        figures
    )
}

fn render_category(category: &StackCategory) -> String {
    let tools: String = category
        .tools
        .iter()
        .map(|tool| match &tool.icon {
            Some(icon) => format!(
                r#"<li><span aria-hidden="true">{}</span> {}</li>"#,
                escape(icon),
                escape(&tool.name)
            ),
            None => format!("<li>{}</li>", escape(&tool.name)),
        })
        .collect();

    format!(
        "        <div class=\"stack-category\">\n            <h3>{}</h3>\n            <ul>{}</ul>\n        </div>\n",
        escape(&category.name),
        tools
    )
}

fn render_stack(stack: &[StackCategory]) -> String {
    let categories: String = stack.iter().map(render_category).collect();
    format!(
        "<section id=\"stack\">\n    <h2>Tech Stack</h2>\n    <div class=\"grid\">\n{}    </div>\n</section>\n",
        categories
    )
}

fn render_footer(profile: &Profile) -> String {
    format!(
        r#"<footer>
    <a href="{github}" target="_blank" rel="noopener noreferrer">GitHub</a>
    <a href="{linkedin}" target="_blank" rel="noopener noreferrer">LinkedIn</a>
    <p><small>{name}</small></p>
</footer>
"#,
        github = escape(&profile.github_url),
        linkedin = escape(&profile.linkedin_url),
        name = escape(&profile.name),
    )
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
