// src/handlers/ui.rs
//! Static pages: a subject picker and the tutor chat page. Served inline,
//! no templating. Markdown and LaTeX rendering happens in the browser via
//! marked and MathJax from CDNs.

use axum::{response::Html, routing::get, Router};

pub fn ui_routes() -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/tutor", get(tutor_page))
}

pub async fn index_page() -> Html<&'static str> {
    Html(
        r###"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Мұғалім — выбери предмет</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f4f6fb;
            color: #1f2430;
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            padding: 3rem 1rem;
        }
        h1 { margin-bottom: 0.5rem; }
        p.sub { color: #5a6272; margin-bottom: 2rem; }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
            gap: 1rem;
            width: 100%;
            max-width: 900px;
        }
        .card {
            display: block;
            background: white;
            border-radius: 10px;
            border-top: 4px solid var(--accent, #333);
            padding: 1.25rem;
            text-decoration: none;
            color: inherit;
            box-shadow: 0 2px 8px rgba(20, 30, 60, 0.08);
            transition: transform 0.15s ease;
        }
        .card:hover { transform: translateY(-3px); }
        .card h2 { font-size: 1.1rem; margin-bottom: 0.4rem; }
        .card p { font-size: 0.9rem; color: #5a6272; }
    </style>
</head>
<body>
    <h1>Мұғалім</h1>
    <p class="sub">Выберите предмет, чтобы начать занятие</p>
    <div class="grid">
        <a class="card" style="--accent:#1e88e5" href="/tutor?subject=math">
            <h2>Учитель математики</h2>
            <p>Помогу с алгеброй, геометрией и анализом.</p>
        </a>
        <a class="card" style="--accent:#43a047" href="/tutor?subject=physics">
            <h2>Учитель физики</h2>
            <p>Помогу с механикой, электричеством и оптикой.</p>
        </a>
        <a class="card" style="--accent:#6a1b9a" href="/tutor?subject=russian">
            <h2>Учитель русского</h2>
            <p>Грамматика, орфография, разбор предложений.</p>
        </a>
        <a class="card" style="--accent:#fb8c00" href="/tutor?subject=kazakh">
            <h2>Учитель казахского</h2>
            <p>Грамматика, лексика и перевод.</p>
        </a>
        <a class="card" style="--accent:#8e24aa" href="/tutor?subject=history">
            <h2>Учитель истории</h2>
            <p>История Казахстана: события, даты, контекст.</p>
        </a>
    </div>
</body>
</html>
"###,
    )
}

pub async fn tutor_page() -> Html<&'static str> {
    Html(
        r###"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Мұғалім — чат с учителем</title>
    <script>
        window.MathJax = { tex: { inlineMath: [['$', '$']], displayMath: [['$$', '$$']] } };
    </script>
    <script src="https://cdn.jsdelivr.net/npm/marked/marked.min.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js" async></script>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        :root { --accent: #333; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f4f6fb;
            color: #1f2430;
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            padding: 1.5rem 1rem;
        }
        header { width: 100%; max-width: 760px; margin-bottom: 1rem; }
        header h1 { color: var(--accent); }
        header p { color: #5a6272; }
        header a { font-size: 0.85rem; color: #5a6272; }
        #chat {
            width: 100%;
            max-width: 760px;
            flex: 1;
            background: white;
            border-radius: 10px;
            border-top: 4px solid var(--accent);
            padding: 1rem;
            overflow-y: auto;
            min-height: 360px;
            max-height: 60vh;
            box-shadow: 0 2px 8px rgba(20, 30, 60, 0.08);
        }
        .message { margin: 0.5rem 0; padding: 0.6rem 0.8rem; border-radius: 8px; max-width: 85%; }
        .message.user { background: var(--accent); color: white; margin-left: auto; }
        .message.teacher { background: #eef1f8; }
        .message.system { color: #8a91a3; font-style: italic; background: none; }
        form { width: 100%; max-width: 760px; display: flex; gap: 0.5rem; margin-top: 1rem; }
        input[type=text] {
            flex: 1;
            padding: 0.7rem 0.9rem;
            border: 1px solid #cfd6e4;
            border-radius: 8px;
            font-size: 1rem;
        }
        button {
            padding: 0.7rem 1.4rem;
            border: none;
            border-radius: 8px;
            background: var(--accent);
            color: white;
            font-size: 1rem;
            cursor: pointer;
        }
    </style>
</head>
<body>
    <header>
        <h1 id="teacher-name">Учитель</h1>
        <p id="teacher-intro"></p>
        <a href="/">&larr; выбрать другой предмет</a>
    </header>
    <div id="chat"></div>
    <form id="ask-form">
        <input type="text" id="question" placeholder="Задайте вопрос..." autocomplete="off">
        <button type="submit">Спросить</button>
    </form>
    <script>
        const subjects = {
            math: { name: 'Учитель математики', color: '#1e88e5', intro: 'Помогу с алгеброй, геометрией и анализом.' },
            physics: { name: 'Учитель физики', color: '#43a047', intro: 'Помогу с механикой, электричеством и оптикой.' },
            russian: { name: 'Учитель русского', color: '#6a1b9a', intro: 'Грамматика, орфография, разбор предложений.' },
            kazakh: { name: 'Учитель казахского', color: '#fb8c00', intro: 'Грамматика, лексика и перевод.' },
            history: { name: 'Учитель истории', color: '#8e24aa', intro: 'История Казахстана: события, даты, контекст.' }
        };

        const subject = new URLSearchParams(window.location.search).get('subject') || 'math';
        const info = subjects[subject] || { name: 'Учитель', color: '#333', intro: '' };
        document.getElementById('teacher-name').textContent = info.name;
        document.getElementById('teacher-intro').textContent = info.intro;
        document.documentElement.style.setProperty('--accent', info.color);

        function addMessage(role, text) {
            const chat = document.getElementById('chat');
            const msg = document.createElement('div');
            msg.className = `message ${role}`;
            if (role === 'teacher') {
                msg.innerHTML = marked.parse(text);
                if (window.MathJax && MathJax.typesetPromise) {
                    MathJax.typesetPromise([msg]).catch(err => console.error('MathJax error:', err));
                }
            } else {
                msg.textContent = text;
            }
            chat.appendChild(msg);
            chat.scrollTop = chat.scrollHeight;
            return msg;
        }

        document.getElementById('ask-form').addEventListener('submit', async (e) => {
            e.preventDefault();
            const input = document.getElementById('question');
            const question = input.value.trim();
            if (!question) return;
            addMessage('user', question);
            input.value = '';
            const pending = addMessage('system', '... думает ...');

            try {
                const res = await fetch('/api/ask', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ subject, question })
                });
                const data = await res.json();
                pending.remove();
                if (res.ok) {
                    addMessage('teacher', data.answer || 'Нет ответа от сервера.');
                } else {
                    addMessage('teacher', 'Ошибка сервера: ' + (data.error || res.status));
                }
            } catch (err) {
                pending.remove();
                addMessage('teacher', 'Ошибка сети: ' + err.message);
            }
        });
    </script>
</body>
</html>
"###,
    )
}
