use crate::about::{INTRO, TEAM, WORK_DIVISION};
use crate::chatbox::Chatbox;
use crate::fitness::{ActivityLevel, AgeGroup, FitnessPlanner, Goal};
use crate::mood::{MOOD_OPTIONS, MoodChat};
use crate::nav::Page;
use std::fmt::Write;

pub fn render_shell(page: Page, body: &str) -> String {
    let mut nav = String::new();
    for candidate in Page::ALL {
        let class = if candidate == page { "nav-link active" } else { "nav-link" };
        let _ = write!(
            nav,
            r#"<form method="post" action="/nav/{slug}"><button class="{class}" type="submit">{title}</button></form>"#,
            slug = candidate.slug(),
            title = candidate.title(),
        );
    }

    SHELL_HTML
        .replace("{{NAV}}", &nav)
        .replace("{{BODY}}", body)
}

pub fn render_home(mood: &MoodChat, fitness: &FitnessPlanner) -> String {
    format!(
        r#"<main class="home">{}{}</main>"#,
        render_mood(mood),
        render_fitness(fitness)
    )
}

fn render_mood(panel: &MoodChat) -> String {
    let options = select_options(MOOD_OPTIONS.iter().copied(), panel.mood());

    let trail = if panel.exchanges().is_empty() {
        r#"<p class="placeholder">Your responses will appear here. Each entry includes a mindfulness tip and a journaling prompt you can use in a separate notebook.</p>"#.to_string()
    } else {
        let mut out = String::new();
        for exchange in panel.exchanges() {
            let _ = write!(
                out,
                r#"<div class="exchange" id="exchange-{id}"><p><strong>You ({mood}):</strong> {user}</p><p class="reply"><strong>AI:</strong> {reply}</p></div>"#,
                id = exchange.id,
                mood = escape(&exchange.mood),
                user = escape(&exchange.user_text),
                reply = escape(&exchange.reply),
            );
        }
        out
    };

    let (disabled, label) = if panel.is_busy() {
        (" disabled", "Thinking...")
    } else {
        ("", "Send")
    };

    format!(
        r#"<section class="card" id="mood">
  <h2>Mental Wellness</h2>
  <p class="muted">Share how you feel and get a gentle, non-medical response with mindfulness tips and a journaling prompt for reflection.</p>
  <form method="post" action="/mood" id="mood-form">
    <label for="mood-select">Select your mood:</label>
    <select id="mood-select" name="mood">{options}</select>
    <textarea name="message" rows="4" placeholder="Write about how you're feeling (optional)...">{message}</textarea>
    <button class="primary" type="submit"{disabled}>{label}</button>
  </form>
  <div class="trail"><strong>Assistant:</strong>{trail}</div>
  <form method="post" action="/mood/clear"><button class="link" type="submit">Clear conversation</button></form>
</section>"#,
        message = escape(panel.message()),
    )
}

fn render_fitness(panel: &FitnessPlanner) -> String {
    let selection = panel.selection();
    let goals = select_options(Goal::ALL.iter().map(|g| g.label()), selection.goal.label());
    let levels = select_options(
        ActivityLevel::ALL.iter().map(|l| l.label()),
        selection.activity_level.label(),
    );
    let ages = select_options(
        AgeGroup::ALL.iter().map(|a| a.label()),
        selection.age_group.label(),
    );

    let (disabled, label) = if panel.is_busy() {
        (" disabled", "Generating...")
    } else {
        ("", "Generate Plan")
    };

    let mut result = String::new();
    if !panel.plan().is_empty() {
        result.push_str(r#"<div class="result"><strong>Suggested Plan:</strong>"#);
        result.push_str(&bullet_list(panel.plan()));
        if !panel.tips().is_empty() {
            result.push_str("<strong>General Tips:</strong>");
            result.push_str(&bullet_list(panel.tips()));
        }
        result.push_str("</div>");
    }

    format!(
        r#"<section class="card" id="fitness">
  <h2>Fitness Coach</h2>
  <p class="muted">Get a simple, non-medical workout plan based on your goal and activity level.</p>
  <form method="post" action="/fitness">
    <div class="row">
      <label>Goal:<br /><select name="goal">{goals}</select></label>
      <label>Activity Level:<br /><select name="activity_level">{levels}</select></label>
      <label>Age Group:<br /><select name="age_group">{ages}</select></label>
    </div>
    <button class="go" type="submit"{disabled}>{label}</button>
  </form>
  {result}
</section>"#
    )
}

pub fn render_chat(panel: &Chatbox) -> String {
    let log = if panel.messages().is_empty() {
        r#"<p class="placeholder">Start the conversation by asking a question or upload a health report below.</p>"#.to_string()
    } else {
        let mut out = String::new();
        for message in panel.messages() {
            let _ = write!(
                out,
                r#"<p class="message"><strong>{}:</strong> {}</p>"#,
                message.sender,
                escape(&message.text)
            );
        }
        out
    };

    let busy = panel.is_busy();
    let disabled = if busy { " disabled" } else { "" };
    let send_label = if busy { "Thinking..." } else { "Send" };
    let analyze_label = if busy { "Analyzing..." } else { "Analyze Report" };
    let selected = panel
        .selected_file()
        .map(|file| format!(r#"<span class="muted">Selected: {}</span>"#, escape(&file.name)))
        .unwrap_or_default();

    format!(
        r#"<main class="chat">
  <h2>AI Chatbox</h2>
  <p class="muted">Ask anything! This uses a wellness-focused AI assistant. Responses are general-purpose and non-medical. You can also upload a health report to get a non-diagnostic summary and general guidance.</p>
  <div class="log">{log}</div>
  <form method="post" action="/chat/message" class="row">
    <input name="message" value="{input}" placeholder="Type your question..." />
    <button class="primary" type="submit"{disabled}>{send_label}</button>
  </form>
  <form method="post" action="/chat/report" enctype="multipart/form-data" class="row">
    <input type="file" name="file" />
    <button class="go" type="submit"{disabled}>{analyze_label}</button>
    {selected}
    <span class="muted small">This analysis is not a medical diagnosis. Always follow your doctor's advice.</span>
  </form>
  <form method="post" action="/chat/clear"><button class="link" type="submit">Clear conversation</button></form>
</main>"#,
        input = escape(panel.input()),
    )
}

pub fn render_about() -> String {
    let mut cards = String::new();
    for member in TEAM {
        let _ = write!(
            cards,
            r#"<div class="member"><div class="avatar">{initial}</div><h3>{name}</h3><p class="muted">{role}</p>{tasks}</div>"#,
            initial = member.initial(),
            name = escape(member.name),
            role = escape(member.role),
            tasks = bullet_list(member.tasks),
        );
    }

    let mut division = String::new();
    for share in WORK_DIVISION {
        let _ = write!(
            division,
            "<li><strong>{}:</strong> {}</li>",
            escape(share.owner),
            escape(share.summary)
        );
    }

    format!(
        r#"<main class="about">
  <h2>About the Team</h2>
  <p class="muted">{intro}</p>
  <div class="team">{cards}</div>
  <section>
    <h3>Work Division Overview</h3>
    <p class="muted">The work is divided so that each member owns a clear part of the system:</p>
    <ul>{division}</ul>
  </section>
</main>"#,
        intro = escape(INTRO),
    )
}

fn select_options<'a>(options: impl Iterator<Item = &'a str>, selected: &str) -> String {
    let mut out = String::new();
    for option in options {
        let marker = if option == selected { " selected" } else { "" };
        let value = escape(option);
        let _ = write!(out, r#"<option value="{value}"{marker}>{value}</option>"#);
    }
    out
}

fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::from("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item.as_ref()));
    }
    out.push_str("</ul>");
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>AI Well-Being Companion</title>
  <style>
    :root {
      --blue: #2563eb;
      --green: #16a34a;
      --ink: #111827;
      --muted: #4b5563;
      --line: #e5e7eb;
      --soft: #f9fafb;
      --shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      display: flex;
      flex-direction: column;
      background: #f3f4f6;
      color: var(--ink);
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    }

    nav {
      background: var(--blue);
      color: white;
      padding: 0.75rem 1.5rem;
      display: flex;
      justify-content: space-between;
      align-items: center;
      box-shadow: 0 2px 6px rgba(15, 23, 42, 0.35);
    }

    nav .links {
      display: flex;
      align-items: center;
      gap: 1rem;
    }

    nav h1 {
      margin: 0 0.5rem 0 0;
      font-size: 1.4rem;
      font-weight: 600;
    }

    nav form {
      margin: 0;
    }

    .nav-link {
      background: transparent;
      border: none;
      color: white;
      padding: 0.35rem 0.75rem;
      border-radius: 999px;
      cursor: pointer;
      font-size: 0.9rem;
    }

    .nav-link.active {
      background: rgba(15, 23, 42, 0.25);
    }

    main {
      width: min(1200px, 100%);
      margin: 1.5rem auto;
      padding: 0 1rem 2rem;
      flex: 1;
    }

    main.home {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 1.25rem;
      align-items: start;
    }

    main.chat {
      max-width: 750px;
    }

    .card,
    .member {
      background: white;
      border-radius: 1rem;
      padding: 1.25rem;
      box-shadow: var(--shadow);
    }

    .card h2 {
      margin-top: 0;
    }

    .muted {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .small {
      font-size: 0.8rem;
    }

    select,
    textarea,
    input {
      font: inherit;
      padding: 0.4rem 0.7rem;
      border-radius: 0.5rem;
      border: 1px solid #d1d5db;
    }

    textarea {
      display: block;
      width: 100%;
      margin: 0.75rem 0;
      resize: vertical;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      gap: 0.75rem;
      align-items: center;
      margin-bottom: 1rem;
    }

    .row input[name="message"] {
      flex: 1;
    }

    button.primary,
    button.go {
      color: white;
      border: none;
      border-radius: 999px;
      padding: 0.5rem 1.2rem;
      cursor: pointer;
      font-weight: 500;
    }

    button.primary {
      background: var(--blue);
    }

    button.go {
      background: var(--green);
    }

    button[disabled] {
      background: #9ca3af;
      cursor: not-allowed;
    }

    button.link {
      background: none;
      border: none;
      color: var(--muted);
      text-decoration: underline;
      cursor: pointer;
      padding: 0;
      margin-top: 0.5rem;
    }

    .trail,
    .result,
    .log {
      margin-top: 1rem;
      padding: 0.75rem;
      background: var(--soft);
      border-radius: 0.75rem;
      border: 1px solid var(--line);
    }

    .trail {
      max-height: 260px;
      overflow-y: auto;
    }

    .log {
      height: 360px;
      overflow-y: auto;
      background: white;
    }

    .exchange {
      margin-top: 0.75rem;
      padding-bottom: 0.6rem;
      border-bottom: 1px solid var(--line);
    }

    .exchange p {
      margin: 0;
    }

    .reply,
    .message {
      white-space: pre-wrap;
    }

    .placeholder {
      color: #9ca3af;
      font-size: 0.9rem;
    }

    .team {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
      gap: 1rem;
    }

    .member h3 {
      margin: 0 0 0.25rem;
      font-size: 1rem;
    }

    .avatar {
      width: 44px;
      height: 44px;
      border-radius: 999px;
      background: var(--blue);
      color: white;
      display: flex;
      align-items: center;
      justify-content: center;
      font-weight: 600;
      margin-bottom: 0.5rem;
    }

    footer {
      padding: 0.75rem 1.5rem;
      text-align: center;
      font-size: 0.85rem;
      color: var(--muted);
      border-top: 1px solid var(--line);
      background: rgba(255, 255, 255, 0.7);
    }
  </style>
</head>
<body>
  <nav>
    <div class="links">
      <h1>AI Well-Being Companion</h1>
      {{NAV}}
    </div>
    <span>Mental Wellness &amp; Fitness Coach</span>
  </nav>

  {{BODY}}

  <footer>
    <strong>Generative AI Hackathon</strong> &nbsp;|&nbsp; AI Well-Being Web Companion
  </footer>

  <script>
    const moodText = document.querySelector('#mood-form textarea');
    if (moodText) {
      moodText.addEventListener('keydown', (event) => {
        if (event.key === 'Enter' && event.ctrlKey) {
          event.preventDefault();
          moodText.form.requestSubmit();
        }
      });
    }
  </script>
</body>
</html>
"#;
