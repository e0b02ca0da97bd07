//! The single HTML page served at `/`

use crate::config::UiConfig;

const FILENAME_NOTICE: &str =
    "⚠️ <strong>파일명은 반드시 영문과 숫자로만 구성해주세요.</strong> 한글, 공백, 특수문자는 오류를 유발할 수 있습니다.";

const SCRIPT: &str = r#"
async function upload(kind, input, status, preview) {
  const file = input.files[0];
  if (!file) return;
  const form = new FormData();
  form.append('file', file);
  const resp = await fetch('/api/' + kind, { method: 'POST', body: form });
  const body = await resp.json();
  if (!resp.ok) { status.className = 'error'; status.textContent = body.error.message; return; }
  status.className = 'success';
  status.textContent = (kind === 'review' ? '감상문' : '성찰일지') + ' 업로드 완료! (' + body.format_name + ', 저장명: ' + body.stored_as + ')';
  preview.value = body.text;
  preview.hidden = false;
  if (kind === 'review') refreshAskState(body.text.length > 0);
}

function refreshAskState(ready) {
  document.getElementById('ask-form').hidden = !ready;
  document.getElementById('ask-info').hidden = ready;
}

async function ask(event) {
  event.preventDefault();
  const input = document.getElementById('question');
  if (!input.value) return;
  const resp = await fetch('/api/ask', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ question: input.value }),
  });
  const body = await resp.json();
  const log = document.getElementById('messages');
  if (!resp.ok) { log.textContent = body.error.message; return; }
  const you = document.createElement('p');
  you.innerHTML = '<strong>🧑 You:</strong> ';
  you.append(body.question);
  const bot = document.createElement('p');
  bot.innerHTML = '<strong>🤖 Claude:</strong> ';
  bot.append(body.response);
  log.replaceChildren(you, bot);
  if (body.log_warning) {
    const warn = document.createElement('p');
    warn.className = 'warning';
    warn.textContent = body.log_warning;
    log.append(warn);
  }
}

let corpusOffset = 0;
async function loadCorpus(offset) {
  const resp = await fetch('/api/corpus?offset=' + offset);
  const body = await resp.json();
  corpusOffset = body.offset;
  document.getElementById('corpus').textContent = body.text;
  document.getElementById('corpus-next').disabled = body.next_offset === undefined;
  document.getElementById('corpus-next').dataset.next = body.next_offset ?? '';
}

window.addEventListener('DOMContentLoaded', () => {
  const review = document.getElementById('review-file');
  review.addEventListener('change', () => upload('review', review,
    document.getElementById('review-status'), document.getElementById('review-preview')));
  const reflection = document.getElementById('reflection-file');
  reflection.addEventListener('change', () => upload('reflection', reflection,
    document.getElementById('reflection-status'), document.getElementById('reflection-preview')));
  document.getElementById('ask-form').addEventListener('submit', ask);
  document.getElementById('corpus-next').addEventListener('click', (e) => loadCorpus(Number(e.target.dataset.next)));
  document.getElementById('corpus-first').addEventListener('click', () => loadCorpus(0));
  refreshAskState(false);
  loadCorpus(0);
});
"#;

/// Render the page for the configured title
pub fn render(ui: &UiConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }}
textarea {{ width: 100%; height: 150px; }}
pre#corpus {{ white-space: pre-wrap; background: #f6f6f6; padding: 1rem; max-height: 300px; overflow-y: auto; }}
.success {{ color: #1a7f37; }} .error, .warning {{ color: #b42318; }} .info {{ color: #175cd3; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p>{subtitle}</p>
<hr>
<h3>소설 원문 보기</h3>
<pre id="corpus"></pre>
<button id="corpus-first">처음으로</button> <button id="corpus-next">다음</button>
<hr>
<h3>1. 감상문 업로드 (.txt, .docx)</h3>
<p>{notice}</p>
<input type="file" id="review-file" accept=".txt,.docx">
<p id="review-status"></p>
<textarea id="review-preview" readonly hidden></textarea>
<hr>
<h3>2. Claude와 문학 토론</h3>
<p id="ask-info" class="info">먼저 감상문을 업로드해주세요.</p>
<form id="ask-form" hidden>
<input type="text" id="question" placeholder="💬 Claude에게 질문해보세요" size="60">
<button type="submit">보내기</button>
</form>
<div id="messages"></div>
<hr>
<h3>3. 성찰일지 업로드 (.txt, .docx)</h3>
<p>{notice}</p>
<input type="file" id="reflection-file" accept=".txt,.docx">
<p id="reflection-status"></p>
<textarea id="reflection-preview" readonly hidden></textarea>
<script>{script}</script>
</body>
</html>
"#,
        title = escape_html(&ui.title),
        subtitle = escape_html(&ui.subtitle),
        notice = FILENAME_NOTICE,
        script = SCRIPT,
    )
}

fn escape_html(text: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_title_and_upload_controls() {
        let page = render(&UiConfig::default());
        assert!(page.contains("<h1>📚 문학 챗봇</h1>"));
        assert!(page.contains(r#"id="review-file" accept=".txt,.docx""#));
        assert!(page.contains(r#"id="reflection-file" accept=".txt,.docx""#));
        assert!(page.contains("먼저 감상문을 업로드해주세요."));
    }

    #[test]
    fn test_title_is_escaped() {
        let ui = UiConfig {
            title: "<script>x</script>".to_string(),
            ..UiConfig::default()
        };
        let page = render(&ui);
        assert!(page.contains("&lt;script&gt;x&lt;/script&gt;"));
    }
}
