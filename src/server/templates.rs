//! HTML templates for the web interface.
//!
//! Plain string assembly, one function per page plus shared chrome. All
//! record-derived text goes through `html_escape` before it reaches markup.

use crate::analysis::{AnalysisReport, Priority};
use crate::directory::FilterCriteria;
use crate::models::{
    CaseStep, CaseTip, CaseTrack, DocumentRecord, IpcSection, Lawyer, PlatformUser,
    ProcessingStatus, User,
};
use crate::repository::PlatformStats;

/// Escape text for safe interpolation into HTML.
pub fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serialize directory criteria (and an optional selection) back into a
/// query string, so filter state survives round-trips through links.
pub fn directory_query(criteria: &FilterCriteria, selected: Option<&str>) -> String {
    let mut params = Vec::new();
    if !criteria.query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(&criteria.query)));
    }
    if let Some(category) = criteria.category.as_deref().filter(|c| !c.is_empty()) {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if let Some(location) = criteria.location.as_deref().filter(|l| !l.is_empty()) {
        params.push(format!("location={}", urlencoding::encode(location)));
    }
    if let Some(selected) = selected {
        params.push(format!("selected={}", urlencoding::encode(selected)));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

fn nav_link(current_path: &str, href: &str, label: &str) -> String {
    let class = if current_path == href { "nav-link active" } else { "nav-link" };
    format!(r#"<a class="{}" href="{}">{}</a>"#, class, href, label)
}

/// Base HTML template with the navigation bar.
pub fn base_template(title: &str, path: &str, user: Option<&User>, content: &str) -> String {
    let mut links = String::new();
    let mut account = String::new();

    match user {
        Some(user) => {
            links.push_str(&nav_link(path, "/dashboard", "Dashboard"));
            links.push_str(&nav_link(path, "/document-simplifier", "Document Simplifier"));
            links.push_str(&nav_link(path, "/lawyer-connect", "Lawyer Connect"));
            links.push_str(&nav_link(path, "/ipc-simplifier", "IPC Simplifier"));
            links.push_str(&nav_link(path, "/case-hierarchy", "Case Guide"));
            if user.is_admin() {
                links.push_str(&nav_link(path, "/admin", "Admin"));
            }
            account.push_str(&format!(
                r#"<a class="nav-link" href="/profile">{}</a>
                <form class="inline" method="post" action="/logout"><button class="link-button" type="submit">Logout</button></form>"#,
                html_escape(&user.name)
            ));
        }
        None => {
            account.push_str(
                r#"<a class="nav-link" href="/login">Login</a><a class="button" href="/register">Register</a>"#,
            );
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Lawgorithm</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header id="main-header">
        <nav>
            <a href="/" class="logo">&#9878; Lawgorithm</a>
            <div class="nav-links">{}</div>
            <div class="nav-account">{}</div>
        </nav>
    </header>
    <main>
    {}
    </main>
</body>
</html>"#,
        html_escape(title),
        links,
        account,
        content
    )
}

/// Render the landing page.
pub fn landing_page(user: Option<&User>) -> String {
    let features = [
        (
            "Document Simplifier",
            "Upload legal documents and get AI-powered summaries with key points highlighted.",
        ),
        (
            "Lawyer Connect",
            "Find and connect with specialized lawyers for your specific legal needs.",
        ),
        (
            "IPC Simplifier",
            "Browse Indian Penal Code sections with simplified explanations.",
        ),
    ];
    let stats = [
        ("10,000+", "Documents Simplified"),
        ("500+", "Verified Lawyers"),
        ("50,000+", "Users Helped"),
        ("99%", "Satisfaction Rate"),
    ];
    let how_it_works = [
        (
            "Upload or Search",
            "Upload your legal document or search for specific legal information you need.",
        ),
        (
            "AI Analysis",
            "Our AI analyzes and simplifies complex legal language into easy-to-understand terms.",
        ),
        (
            "Get Results",
            "Receive simplified summaries, lawyer connections, or case guidance instantly.",
        ),
    ];

    let mut feature_cards = String::new();
    for (title, description) in features {
        feature_cards.push_str(&format!(
            r#"<div class="card feature"><h3>{}</h3><p>{}</p></div>"#,
            title, description
        ));
    }

    let mut stat_cells = String::new();
    for (number, label) in stats {
        stat_cells.push_str(&format!(
            r#"<div class="stat"><div class="stat-number">{}</div><div class="stat-label">{}</div></div>"#,
            number, label
        ));
    }

    let mut steps = String::new();
    for (i, (title, description)) in how_it_works.iter().enumerate() {
        steps.push_str(&format!(
            r#"<div class="card step"><div class="step-number">{}</div><h3>{}</h3><p>{}</p></div>"#,
            i + 1,
            title,
            description
        ));
    }

    let content = format!(
        r#"
    <section class="hero">
        <h1>Legal Help, Simplified</h1>
        <p>Understand legal documents, connect with verified lawyers, and navigate the
        Indian Penal Code - all in plain language.</p>
        <div class="hero-actions">
            <a class="button" href="/register">Get Started</a>
            <a class="button secondary" href="/ipc-simplifier">Browse IPC</a>
        </div>
    </section>
    <section class="features">{}</section>
    <section class="stats">{}</section>
    <section class="how-it-works"><h2>How It Works</h2><div class="steps">{}</div></section>
    "#,
        feature_cards, stat_cells, steps
    );

    base_template("Legal Help, Simplified", "/", user, &content)
}

/// Render the login form, optionally with a failed-attempt message.
pub fn login_page(user: Option<&User>, error: Option<&str>, email: &str) -> String {
    let error_block = error
        .map(|msg| format!(r#"<p class="form-error">{}</p>"#, html_escape(msg)))
        .unwrap_or_default();

    let content = format!(
        r#"
    <section class="auth-card card">
        <h1>Sign In</h1>
        {}
        <form method="post" action="/login">
            <label for="email">Email</label>
            <input id="email" name="email" type="email" value="{}" required>
            <label for="password">Password</label>
            <input id="password" name="password" type="password" required>
            <button class="button" type="submit">Login</button>
        </form>
        <p class="form-hint">No account yet? <a href="/register">Register</a></p>
    </section>
    "#,
        error_block,
        html_escape(email)
    );

    base_template("Sign In", "/login", user, &content)
}

/// Render the registration form.
pub fn register_page(user: Option<&User>, error: Option<&str>, name: &str, email: &str) -> String {
    let error_block = error
        .map(|msg| format!(r#"<p class="form-error">{}</p>"#, html_escape(msg)))
        .unwrap_or_default();

    let content = format!(
        r#"
    <section class="auth-card card">
        <h1>Create Account</h1>
        {}
        <form method="post" action="/register">
            <label for="name">Full Name</label>
            <input id="name" name="name" type="text" value="{}" required>
            <label for="email">Email</label>
            <input id="email" name="email" type="email" value="{}" required>
            <label for="password">Password</label>
            <input id="password" name="password" type="password" required>
            <button class="button" type="submit">Register</button>
        </form>
        <p class="form-hint">Already registered? <a href="/login">Login</a></p>
    </section>
    "#,
        error_block,
        html_escape(name),
        html_escape(email)
    );

    base_template("Create Account", "/register", user, &content)
}

/// Render the signed-in dashboard.
pub fn dashboard(user: &User) -> String {
    let quick_stats = [
        ("12", "Documents Processed"),
        ("3", "Lawyer Consultations"),
        ("45", "IPC Sections Viewed"),
        ("2", "Cases Tracked"),
    ];
    let quick_actions = [
        (
            "/document-simplifier",
            "Simplify Document",
            "Upload a legal document for AI analysis",
        ),
        (
            "/lawyer-connect",
            "Find Lawyer",
            "Connect with specialized legal experts",
        ),
        (
            "/ipc-simplifier",
            "Browse IPC",
            "Explore Indian Penal Code sections",
        ),
    ];
    let recent_activity = [
        ("Property Agreement Simplified", "2 hours ago", true),
        ("Connected with Adv. Priya Sharma", "1 day ago", false),
        ("Viewed IPC Section 420", "3 days ago", true),
    ];

    let mut stat_cells = String::new();
    for (value, label) in quick_stats {
        stat_cells.push_str(&format!(
            r#"<div class="card stat"><div class="stat-number">{}</div><div class="stat-label">{}</div></div>"#,
            value, label
        ));
    }

    let mut actions = String::new();
    for (href, title, description) in quick_actions {
        actions.push_str(&format!(
            r#"<a class="card action" href="{}"><h3>{}</h3><p>{}</p></a>"#,
            href, title, description
        ));
    }

    let mut activity = String::new();
    for (title, time, completed) in recent_activity {
        let marker = if completed { "done" } else { "pending" };
        activity.push_str(&format!(
            r#"<li class="activity {}"><span>{}</span><time>{}</time></li>"#,
            marker, title, time
        ));
    }

    let content = format!(
        r#"
    <h1>Welcome back, {}!</h1>
    <p class="subtitle">Here's what's happening with your legal matters today.</p>
    <section class="stats">{}</section>
    <div class="columns">
        <section class="quick-actions">
            <h2>Quick Actions</h2>
            {}
        </section>
        <section class="recent-activity">
            <h2>Recent Activity</h2>
            <ul class="card">{}</ul>
            <div class="card reminders">
                <h3>Upcoming Reminders</h3>
                <p>Property case hearing - Dec 15, 2024</p>
                <p>Document deadline - Dec 20, 2024</p>
            </div>
        </section>
    </div>
    "#,
        html_escape(&user.name),
        stat_cells,
        actions,
        activity
    );

    base_template("Dashboard", "/dashboard", Some(user), &content)
}

fn category_pills(base_path: &str, criteria: &FilterCriteria, categories: &[String]) -> String {
    let mut pills = String::new();
    for category in categories {
        let active = criteria.category.as_deref() == Some(category.as_str());
        // Clicking a pill applies toggle semantics: the active pill links to
        // criteria without it, every other pill replaces the selection.
        let mut toggled = criteria.clone();
        toggled.toggle_category(category);
        let class = if active { "pill active" } else { "pill" };
        pills.push_str(&format!(
            r#"<a class="{}" href="{}{}">{}</a>"#,
            class,
            base_path,
            directory_query(&toggled, None),
            html_escape(category)
        ));
    }
    format!(r#"<div class="pills">{}</div>"#, pills)
}

fn no_results(title: &str, hint: &str) -> String {
    format!(
        r#"<div class="card empty-state"><h3>{}</h3><p>{}</p></div>"#,
        title, hint
    )
}

/// Render the lawyer directory with its search controls and result cards.
pub fn lawyer_directory(
    user: Option<&User>,
    criteria: &FilterCriteria,
    categories: &[String],
    visible: &[&Lawyer],
) -> String {
    let mut cards = String::new();
    for lawyer in visible {
        let mut tags = String::new();
        for spec in &lawyer.specializations {
            tags.push_str(&format!(r#"<span class="tag">{}</span>"#, html_escape(spec)));
        }
        cards.push_str(&format!(
            r#"
        <div class="card lawyer">
            <div class="lawyer-head">
                <h3>{name}</h3>
                <span class="availability">{availability}</span>
            </div>
            <p class="meta">{experience} years experience &middot; {location}</p>
            <p class="meta">&#9733; {rating} ({reviews} reviews) &middot; &#8377;{rate}/hour</p>
            <div class="tags">{tags}</div>
            <p>{description}</p>
            <p class="meta">Languages: {languages}</p>
            <div class="actions">
                <button class="button" disabled>Book Consultation</button>
                <button class="button secondary" disabled>Call Now</button>
                <button class="button secondary" disabled>Message</button>
            </div>
        </div>
        "#,
            name = html_escape(&lawyer.name),
            availability = html_escape(&lawyer.availability),
            experience = lawyer.experience_years,
            location = html_escape(&lawyer.location),
            rating = lawyer.rating,
            reviews = lawyer.reviews,
            rate = lawyer.hourly_rate,
            tags = tags,
            description = html_escape(&lawyer.description),
            languages = html_escape(&lawyer.languages.join(", ")),
        ));
    }

    let results = if visible.is_empty() {
        no_results(
            "No lawyers found",
            "Try adjusting your search criteria or browse all categories.",
        )
    } else {
        cards
    };

    let plural = if visible.len() == 1 { "" } else { "s" };
    let content = format!(
        r#"
    <h1>Lawyer Connect</h1>
    <p class="subtitle">Find and connect with verified legal experts for your specific needs.</p>
    <form class="card search-bar" method="get" action="/lawyer-connect">
        <input type="text" name="q" placeholder="Search lawyers..." value="{query}">
        <input type="text" name="location" placeholder="Location..." value="{location}">
        <input type="hidden" name="category" value="{category}">
        <button class="button" type="submit">Search</button>
    </form>
    {pills}
    <p class="result-count">Found {count} lawyer{plural} matching your criteria</p>
    <div class="results">{results}</div>
    "#,
        query = html_escape(&criteria.query),
        location = html_escape(criteria.location.as_deref().unwrap_or("")),
        category = html_escape(criteria.category.as_deref().unwrap_or("")),
        pills = category_pills("/lawyer-connect", criteria, categories),
        count = visible.len(),
        plural = plural,
        results = results,
    );

    base_template("Lawyer Connect", "/lawyer-connect", user, &content)
}

fn ipc_detail_panel(selected: Option<&IpcSection>) -> String {
    match selected {
        Some(section) => {
            let mut examples = String::new();
            for example in &section.examples {
                examples.push_str(&format!("<li>{}</li>", html_escape(example)));
            }
            format!(
                r#"
            <div class="card detail">
                <h2>Section {section}</h2>
                <h3>{title}</h3>
                <h4>Original Text:</h4>
                <blockquote>{original}</blockquote>
                <h4>Simplified Explanation:</h4>
                <p>{simplified}</p>
                <h4>Punishment:</h4>
                <p class="punishment">{punishment}</p>
                <h4>Examples:</h4>
                <ul>{examples}</ul>
            </div>
            "#,
                section = html_escape(&section.section),
                title = html_escape(&section.title),
                original = html_escape(&section.original_text),
                simplified = html_escape(&section.simplified_text),
                punishment = html_escape(&section.punishment),
                examples = examples,
            )
        }
        None => r#"
            <div class="card detail empty-state">
                <h3>Select an IPC Section</h3>
                <p>Click on any section from the list to view detailed explanation and examples.</p>
            </div>
            "#
        .to_string(),
    }
}

/// Render the IPC catalog: list on the left, detail panel on the right.
pub fn ipc_browser(
    user: Option<&User>,
    criteria: &FilterCriteria,
    categories: &[String],
    visible: &[&IpcSection],
    selected: Option<&IpcSection>,
) -> String {
    let mut rows = String::new();
    for section in visible {
        rows.push_str(&format!(
            r#"
        <a class="card section" href="/ipc-simplifier{href}">
            <div class="section-head">
                <span class="section-id">Section {section}</span>
                <span class="tag">{category}</span>
            </div>
            <h3>{title}</h3>
            <p>{simplified}</p>
            <p class="punishment">Punishment: {punishment}</p>
        </a>
        "#,
            href = directory_query(criteria, Some(&section.section)),
            section = html_escape(&section.section),
            category = html_escape(&section.category),
            title = html_escape(&section.title),
            simplified = html_escape(&section.simplified_text),
            punishment = html_escape(&section.punishment),
        ));
    }

    let list = if visible.is_empty() {
        no_results(
            "No sections found",
            "Try adjusting your search criteria or browse all categories.",
        )
    } else {
        rows
    };

    let plural = if visible.len() == 1 { "" } else { "s" };
    let content = format!(
        r#"
    <h1>IPC Simplifier</h1>
    <p class="subtitle">Browse and understand Indian Penal Code sections in simple language.</p>
    <form class="card search-bar" method="get" action="/ipc-simplifier">
        <input type="text" name="q" placeholder="Search IPC sections..." value="{query}">
        <input type="hidden" name="category" value="{category}">
        <button class="button" type="submit">Search</button>
    </form>
    {pills}
    <div class="columns">
        <section class="results">
            <p class="result-count">Found {count} section{plural}</p>
            {list}
        </section>
        <aside class="detail-panel">{detail}</aside>
    </div>
    "#,
        query = html_escape(&criteria.query),
        category = html_escape(criteria.category.as_deref().unwrap_or("")),
        pills = category_pills("/ipc-simplifier", criteria, categories),
        count = visible.len(),
        plural = plural,
        list = list,
        detail = ipc_detail_panel(selected),
    );

    base_template("IPC Simplifier", "/ipc-simplifier", user, &content)
}

/// Render the case-process guide for one track.
pub fn case_guide(
    user: Option<&User>,
    track: CaseTrack,
    steps: &[CaseStep],
    tips: &[CaseTip],
) -> String {
    let tab = |t: CaseTrack, href: &str| {
        let class = if t == track { "pill active" } else { "pill" };
        format!(r#"<a class="{}" href="{}">{}</a>"#, class, href, t.label())
    };

    let mut timeline = String::new();
    for (i, step) in steps.iter().enumerate() {
        let state = if step.current {
            "current"
        } else if step.completed {
            "completed"
        } else {
            "upcoming"
        };
        let mut documents = String::new();
        for document in &step.documents {
            documents.push_str(&format!(r#"<span class="tag">{}</span>"#, html_escape(document)));
        }
        timeline.push_str(&format!(
            r#"
        <div class="card step {state}">
            <div class="step-number">{number}</div>
            <h3>{title}</h3>
            <p>{description}</p>
            <p class="meta">Duration: {duration}</p>
            <div class="tags">{documents}</div>
        </div>
        "#,
            state = state,
            number = i + 1,
            title = html_escape(&step.title),
            description = html_escape(&step.description),
            duration = html_escape(&step.duration),
            documents = documents,
        ));
    }

    let mut tip_cards = String::new();
    for tip in tips {
        tip_cards.push_str(&format!(
            r#"<div class="card tip"><h3>{}</h3><p>{}</p></div>"#,
            html_escape(&tip.title),
            html_escape(&tip.description)
        ));
    }

    let content = format!(
        r#"
    <h1>Case Process Guide</h1>
    <p class="subtitle">Understand how your case moves through the courts, stage by stage.</p>
    <div class="pills">{criminal_tab}{civil_tab}</div>
    <section class="timeline">{timeline}</section>
    <section class="tips"><h2>Practical Tips</h2><div class="tip-grid">{tips}</div></section>
    "#,
        criminal_tab = tab(CaseTrack::Criminal, "/case-hierarchy?track=criminal"),
        civil_tab = tab(CaseTrack::Civil, "/case-hierarchy?track=civil"),
        timeline = timeline,
        tips = tip_cards,
    );

    base_template("Case Process Guide", "/case-hierarchy", user, &content)
}

/// What the document simplifier view is currently showing.
pub enum SimplifierState<'a> {
    Idle,
    Pending,
    Rejected(&'a str),
    Completed(&'a AnalysisReport),
}

fn report_section(report: &AnalysisReport) -> String {
    let mut key_points = String::new();
    for point in &report.key_points {
        key_points.push_str(&format!("<li>{}</li>", html_escape(point)));
    }
    let mut obligations = String::new();
    for obligation in &report.legal_obligations {
        obligations.push_str(&format!("<li>{}</li>", html_escape(obligation)));
    }
    let mut deadlines = String::new();
    for deadline in &report.deadlines {
        let class = match deadline.priority {
            Priority::High => "deadline high",
            Priority::Medium => "deadline medium",
        };
        deadlines.push_str(&format!(
            r#"<div class="{}"><span>{}</span><span class="priority">{} priority</span><time>{}</time></div>"#,
            class,
            html_escape(&deadline.item),
            deadline.priority.label(),
            html_escape(&deadline.due),
        ));
    }
    let mut risks = String::new();
    for risk in &report.risk_areas {
        risks.push_str(&format!("<li>{}</li>", html_escape(risk)));
    }

    format!(
        r#"
    <div class="card"><h3>Document Summary</h3><p>{summary}</p></div>
    <div class="card"><h3>Key Points</h3><ul>{key_points}</ul></div>
    <div class="card"><h3>Important Deadlines</h3>{deadlines}</div>
    <div class="card"><h3>Legal Obligations</h3><ul>{obligations}</ul></div>
    <div class="card risk"><h3>Potential Risk Areas</h3><ul>{risks}</ul></div>
    "#,
        summary = html_escape(&report.summary),
        key_points = key_points,
        deadlines = deadlines,
        obligations = obligations,
        risks = risks,
    )
}

/// Render the document simplifier: input panel plus the current task state.
pub fn document_simplifier(user: &User, state: &SimplifierState<'_>) -> String {
    let (results, disabled) = match state {
        SimplifierState::Idle => (String::new(), ""),
        SimplifierState::Pending => (
            r#"<div class="card pending">Analyzing your document with AI...</div>"#.to_string(),
            "disabled",
        ),
        SimplifierState::Rejected(reason) => (
            format!(r#"<p class="form-error">{}</p>"#, html_escape(reason)),
            "",
        ),
        SimplifierState::Completed(report) => (report_section(report), ""),
    };

    let content = format!(
        r#"
    <h1>Document Simplifier</h1>
    <p class="subtitle">Upload or paste your legal document for AI-powered analysis and simplification.</p>
    <div class="columns">
        <section class="input-panel">
            <form class="card" method="post" action="/document-simplifier">
                <h2>Upload Document</h2>
                <label for="file_name">Document file</label>
                <input id="file_name" name="file_name" type="text" placeholder="agreement.pdf">
                <p class="form-hint">Supports PDF, DOC, DOCX, TXT files up to 10MB</p>
                <h2>Or Paste Document Text</h2>
                <textarea name="document_text" rows="10" placeholder="Paste your legal document text here..."></textarea>
                <button class="button" type="submit" {disabled}>Analyze Document</button>
            </form>
        </section>
        <section class="results-panel">{results}</section>
    </div>
    "#,
        disabled = disabled,
        results = results,
    );

    base_template("Document Simplifier", "/document-simplifier", Some(user), &content)
}

fn status_badge(status: ProcessingStatus) -> String {
    let class = match status {
        ProcessingStatus::Processed => "badge green",
        ProcessingStatus::Processing => "badge blue",
        ProcessingStatus::Pending => "badge amber",
    };
    format!(r#"<span class="{}">{}</span>"#, class, status.label())
}

/// Render the admin panel: stat cards plus the four management tables.
pub fn admin_panel(
    user: &User,
    stats: PlatformStats,
    lawyers: &[Lawyer],
    sections: &[IpcSection],
    users: &[PlatformUser],
    documents: &[DocumentRecord],
) -> String {
    let mut lawyer_rows = String::new();
    for lawyer in lawyers {
        lawyer_rows.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td>{} years</td><td>{}</td><td class="row-actions">view &middot; edit &middot; delete</td></tr>"#,
            html_escape(&lawyer.name),
            html_escape(&lawyer.specializations.join(", ")),
            lawyer.experience_years,
            html_escape(&lawyer.location),
        ));
    }

    let mut section_rows = String::new();
    for section in sections {
        section_rows.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td class="row-actions">view &middot; edit &middot; delete</td></tr>"#,
            html_escape(&section.section),
            html_escape(&section.title),
            html_escape(&section.category),
        ));
    }

    let mut user_rows = String::new();
    for member in users {
        user_rows.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="row-actions">view &middot; delete</td></tr>"#,
            html_escape(&member.name),
            html_escape(&member.email),
            member.joined.format("%Y-%m-%d"),
            member.cases,
        ));
    }

    let mut document_rows = String::new();
    for document in documents {
        document_rows.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="row-actions">view &middot; delete</td></tr>"#,
            html_escape(&document.title),
            html_escape(&document.owner),
            document.uploaded.format("%Y-%m-%d"),
            status_badge(document.status),
        ));
    }

    let content = format!(
        r#"
    <h1>Admin Panel</h1>
    <p class="subtitle">Manage lawyers, IPC sections, users, and documents on the platform.</p>
    <section class="stats">
        <div class="card stat"><div class="stat-number">{total_lawyers}</div><div class="stat-label">Total Lawyers</div></div>
        <div class="card stat"><div class="stat-number">{documents_processed}</div><div class="stat-label">Documents Processed</div></div>
        <div class="card stat"><div class="stat-number">{ipc_sections}</div><div class="stat-label">IPC Sections</div></div>
        <div class="card stat"><div class="stat-number">{active_users}</div><div class="stat-label">Active Users</div></div>
    </section>
    <section class="card admin-table">
        <h2>Manage Lawyers</h2>
        <table><thead><tr><th>Name</th><th>Specialization</th><th>Experience</th><th>Location</th><th>Actions</th></tr></thead>
        <tbody>{lawyer_rows}</tbody></table>
    </section>
    <section class="card admin-table">
        <h2>Manage IPC Sections</h2>
        <table><thead><tr><th>Section</th><th>Title</th><th>Category</th><th>Actions</th></tr></thead>
        <tbody>{section_rows}</tbody></table>
    </section>
    <section class="card admin-table">
        <h2>Manage Users</h2>
        <table><thead><tr><th>Name</th><th>Email</th><th>Join Date</th><th>Cases</th><th>Actions</th></tr></thead>
        <tbody>{user_rows}</tbody></table>
    </section>
    <section class="card admin-table">
        <h2>Manage Documents</h2>
        <table><thead><tr><th>Title</th><th>User</th><th>Upload Date</th><th>Status</th><th>Actions</th></tr></thead>
        <tbody>{document_rows}</tbody></table>
    </section>
    "#,
        total_lawyers = stats.total_lawyers,
        documents_processed = stats.documents_processed,
        ipc_sections = stats.ipc_sections,
        active_users = stats.active_users,
        lawyer_rows = lawyer_rows,
        section_rows = section_rows,
        user_rows = user_rows,
        document_rows = document_rows,
    );

    base_template("Admin Panel", "/admin", Some(user), &content)
}

/// Render the profile page.
pub fn profile_page(user: &User) -> String {
    let activity = [
        ("Documents Processed", "12"),
        ("Lawyer Consultations", "3"),
        ("IPC Sections Viewed", "45"),
        ("Active Cases", "2"),
    ];
    let mut summary = String::new();
    for (label, value) in activity {
        summary.push_str(&format!(
            r#"<div class="summary-row"><span>{}</span><span class="value">{}</span></div>"#,
            label, value
        ));
    }

    let content = format!(
        r#"
    <h1>Profile</h1>
    <p class="subtitle">Manage your account information and preferences.</p>
    <div class="columns">
        <section class="card profile-card">
            <h2>{name}</h2>
            <p class="meta">{email}</p>
            <p class="meta">Member since 2024-01-15 &middot; Mumbai, Maharashtra</p>
            <p>Legal professional seeking clarity in complex legal matters.</p>
        </section>
        <section class="card">
            <h3>Activity Summary</h3>
            {summary}
        </section>
    </div>
    "#,
        name = html_escape(&user.name),
        email = html_escape(&user.email),
        summary = summary,
    );

    base_template("Profile", "/profile", Some(user), &content)
}
