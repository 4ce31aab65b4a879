pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MindMate - Mood Journal</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #667eea;
      --bg-2: #764ba2;
      --ink: #2b2a36;
      --accent: #667eea;
      --low: #4caf50;
      --medium: #ff9800;
      --high: #f44336;
      --card: rgba(255, 255, 255, 0.95);
      --shadow: 0 24px 60px rgba(42, 36, 88, 0.25);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1) 0%, var(--bg-2) 100%);
      background-attachment: fixed;
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(10px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
      text-align: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
      color: var(--accent);
    }

    .subtitle {
      margin: 0;
      color: #5f5c6e;
      font-size: 1rem;
    }

    .user-row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
      justify-content: center;
    }

    .user-row input {
      flex: 1;
      min-width: 200px;
      max-width: 320px;
    }

    input, textarea, select {
      font: inherit;
      color: var(--ink);
      border: 1px solid rgba(102, 126, 234, 0.35);
      border-radius: 12px;
      padding: 10px 14px;
      background: white;
    }

    textarea {
      width: 100%;
      min-height: 140px;
      resize: vertical;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button.secondary {
      background: rgba(102, 126, 234, 0.12);
      color: var(--accent);
    }

    button.danger {
      background: var(--high);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(102, 126, 234, 0.12);
      border-radius: 999px;
      justify-self: center;
    }

    .tab {
      background: transparent;
      color: #6b6580;
      padding: 8px 18px;
      font-size: 0.95rem;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(42, 36, 88, 0.12);
    }

    .panel {
      display: none;
      gap: 18px;
    }

    .panel.active {
      display: grid;
    }

    .entry-form {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 16px;
    }

    .entry-side {
      display: grid;
      gap: 12px;
      align-content: start;
    }

    .result {
      display: none;
      gap: 14px;
    }

    .result.visible {
      display: grid;
    }

    .severity-banner {
      padding: 14px 18px;
      border-radius: 12px;
      border-left: 6px solid var(--low);
      background: #e8f5e9;
      font-weight: 600;
    }

    .severity-banner[data-severity="medium"] {
      border-left-color: var(--medium);
      background: #fff3e0;
    }

    .severity-banner[data-severity="high"] {
      border-left-color: var(--high);
      background: #ffebee;
    }

    .result-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 14px;
    }

    .card {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(102, 126, 234, 0.15);
    }

    .card h3 {
      margin: 0 0 10px;
      font-size: 1.05rem;
      color: var(--accent);
    }

    .card pre {
      white-space: pre-wrap;
      font: inherit;
      margin: 0;
    }

    .score-bar {
      display: grid;
      grid-template-columns: 110px 1fr 40px;
      align-items: center;
      gap: 8px;
      font-size: 0.9rem;
      margin-bottom: 6px;
    }

    .score-bar .track {
      height: 8px;
      border-radius: 999px;
      background: rgba(102, 126, 234, 0.15);
      overflow: hidden;
    }

    .score-bar .fill {
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .metric {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(102, 126, 234, 0.15);
      display: grid;
      gap: 6px;
      text-align: center;
    }

    .metric .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b86a0;
    }

    .metric .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    #trend-chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    #trend-chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(102, 126, 234, 0.18);
    }

    .chart-label {
      fill: #7a7490;
      font-size: 11px;
    }

    .history-controls {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .history-controls input {
      flex: 1;
      min-width: 180px;
    }

    .entry-item {
      background: white;
      border-radius: 16px;
      border: 1px solid rgba(102, 126, 234, 0.15);
      overflow: hidden;
    }

    .entry-item summary {
      cursor: pointer;
      padding: 14px 16px;
      font-weight: 600;
      list-style: none;
      display: flex;
      justify-content: space-between;
      gap: 10px;
      flex-wrap: wrap;
    }

    .entry-item .body {
      padding: 0 16px 16px;
      display: grid;
      gap: 10px;
    }

    .pill {
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 0.8rem;
      font-weight: 600;
      color: white;
      background: var(--low);
    }

    .pill[data-severity="medium"] {
      background: var(--medium);
    }

    .pill[data-severity="high"] {
      background: var(--high);
    }

    .status {
      font-size: 0.95rem;
      color: #6b6580;
      min-height: 1.2em;
      text-align: center;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    footer {
      text-align: center;
      color: #6b6580;
      font-size: 0.85rem;
    }

    @media (max-width: 640px) {
      .entry-form {
        grid-template-columns: 1fr;
      }
      .app {
        padding: 26px 20px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>MindMate</h1>
      <p class="subtitle">Describe how you feel; get a trigger read, advice, and a track to play.</p>
    </header>

    <section class="user-row">
      <input id="user-id" type="text" placeholder="Your user id" autocomplete="username" />
      <button class="secondary" id="load-btn" type="button">Load my journal</button>
    </section>

    <nav class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="entry" role="tab">New Entry</button>
      <button class="tab" type="button" data-tab="analytics" role="tab">Analytics</button>
      <button class="tab" type="button" data-tab="history" role="tab">History</button>
    </nav>

    <section class="panel active" id="panel-entry">
      <div class="entry-form">
        <textarea id="mood-text" placeholder="I'm feeling overwhelmed by work deadlines and worried about..."></textarea>
        <div class="entry-side">
          <label for="severity-select">Severity</label>
          <select id="severity-select">
            <option value="">Auto-detect</option>
            <option value="low">Low</option>
            <option value="medium">Medium</option>
            <option value="high">High</option>
          </select>
          <label for="private-note">Private note (not analyzed)</label>
          <input id="private-note" type="text" placeholder="Optional" />
          <button id="analyze-btn" type="button">Analyze Mood</button>
        </div>
      </div>

      <div class="result" id="result">
        <div class="severity-banner" id="severity-banner"></div>
        <div class="result-grid">
          <div class="card">
            <h3>Advice</h3>
            <pre id="result-advice"></pre>
          </div>
          <div class="card">
            <h3>Deep Insight</h3>
            <p id="result-insight"></p>
            <h3>Recommended Music</h3>
            <p id="result-music"></p>
          </div>
          <div class="card">
            <h3>Trigger Scores</h3>
            <div id="result-scores"></div>
          </div>
        </div>
      </div>
    </section>

    <section class="panel" id="panel-analytics">
      <div class="metrics">
        <div class="metric">
          <span class="label">Total entries</span>
          <span class="value" id="metric-total">0</span>
        </div>
        <div class="metric">
          <span class="label">High severity</span>
          <span class="value" id="metric-high">0%</span>
        </div>
        <div class="metric">
          <span class="label">Top trigger</span>
          <span class="value" id="metric-trigger">-</span>
        </div>
        <div class="metric">
          <span class="label">Days tracked</span>
          <span class="value" id="metric-days">0</span>
        </div>
      </div>

      <div class="result-grid">
        <div class="card">
          <h3>Severity distribution</h3>
          <div id="severity-bars"></div>
        </div>
        <div class="card">
          <h3>Trigger frequency</h3>
          <div id="trigger-bars"></div>
        </div>
      </div>

      <div class="card">
        <h3>Average daily severity</h3>
        <svg id="trend-chart" viewBox="0 0 600 240" role="img" aria-label="Daily severity trend"></svg>
      </div>
    </section>

    <section class="panel" id="panel-history">
      <div class="history-controls">
        <input id="search-box" type="text" placeholder="Search by trigger or mood text" />
        <button class="secondary" id="export-btn" type="button">Export JSON</button>
        <button class="danger" id="clear-btn" type="button">Clear my data</button>
      </div>
      <div id="history-list"></div>
    </section>

    <div class="status" id="status"></div>

    <footer>
      <p><strong>MindMate</strong> - wellness tracking only. In crisis, contact emergency services or call <strong>988</strong>.</p>
      <p>Your data is stored locally and scoped to the user id you enter.</p>
    </footer>
  </main>

  <script>
    const userInput = document.getElementById('user-id');
    const statusEl = document.getElementById('status');
    const resultEl = document.getElementById('result');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let entries = [];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const currentUser = () => userInput.value.trim();

    const requireUser = () => {
      const user = currentUser();
      if (!user) {
        setStatus('Enter a user id first', 'error');
        return null;
      }
      return user;
    };

    const setActiveTab = (name) => {
      tabs.forEach((button) => {
        button.classList.toggle('active', button.dataset.tab === name);
      });
      ['entry', 'analytics', 'history'].forEach((panel) => {
        document.getElementById('panel-' + panel).classList.toggle('active', panel === name);
      });
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    const titleCase = (value) => value.charAt(0).toUpperCase() + value.slice(1);

    const renderResult = (entry) => {
      const banner = document.getElementById('severity-banner');
      banner.dataset.severity = entry.severity;
      banner.textContent = 'Severity: ' + entry.severity.toUpperCase()
        + ' | Primary trigger: ' + titleCase(entry.primary_trigger);

      document.getElementById('result-advice').textContent = entry.advice;
      document.getElementById('result-insight').textContent = entry.deep_insight;
      document.getElementById('result-music').textContent = entry.music_track;

      const scoresEl = document.getElementById('result-scores');
      scoresEl.innerHTML = '';
      const scored = Object.entries(entry.trigger_scores)
        .filter(([, score]) => score > 0)
        .sort((a, b) => b[1] - a[1]);
      if (!scored.length) {
        scoresEl.textContent = 'No trigger keywords matched.';
        return;
      }
      const max = scored[0][1];
      scored.slice(0, 5).forEach(([trigger, score]) => {
        const row = document.createElement('div');
        row.className = 'score-bar';
        const pct = Math.round((score / max) * 100);
        row.innerHTML = '<span>' + titleCase(trigger) + '</span>'
          + '<span class="track"><span class="fill" style="width:' + pct + '%"></span></span>'
          + '<span>' + score + '</span>';
        scoresEl.appendChild(row);
      });
    };

    const analyze = async () => {
      const user = requireUser();
      if (!user) return;

      const mood = document.getElementById('mood-text').value;
      const severity = document.getElementById('severity-select').value || null;
      const note = document.getElementById('private-note').value.trim() || null;

      setStatus('Analyzing...', 'info');
      const res = await fetch('/api/analyze', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ user_id: user, mood, severity, private_note: note })
      });

      if (!res.ok) {
        setStatus(await res.text(), 'error');
        return;
      }

      const entry = await res.json();
      resultEl.classList.add('visible');
      renderResult(entry);
      setStatus('Entry saved', 'ok');
      refresh().catch((err) => setStatus(err.message, 'error'));
    };

    const loadEntries = async (user) => {
      const res = await fetch('/api/entries?user_id=' + encodeURIComponent(user));
      if (!res.ok) {
        throw new Error('Unable to load entries');
      }
      entries = await res.json();
      renderHistory();
    };

    const loadStats = async (user) => {
      const res = await fetch('/api/stats?user_id=' + encodeURIComponent(user));
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      renderStats(await res.json());
    };

    const refresh = async () => {
      const user = currentUser();
      if (!user) return;
      await Promise.all([loadEntries(user), loadStats(user)]);
    };

    const barRow = (label, count, max, color) => {
      const row = document.createElement('div');
      row.className = 'score-bar';
      const pct = max ? Math.round((count / max) * 100) : 0;
      row.innerHTML = '<span>' + label + '</span>'
        + '<span class="track"><span class="fill" style="width:' + pct + '%; background:' + color + '"></span></span>'
        + '<span>' + count + '</span>';
      return row;
    };

    const renderStats = (stats) => {
      document.getElementById('metric-total').textContent = stats.total_entries;
      document.getElementById('metric-high').textContent = Math.round(stats.high_severity_pct) + '%';
      document.getElementById('metric-trigger').textContent =
        stats.top_trigger ? titleCase(stats.top_trigger) : '-';
      document.getElementById('metric-days').textContent = stats.days_tracked;

      const severityBars = document.getElementById('severity-bars');
      severityBars.innerHTML = '';
      const counts = stats.severity_counts;
      const maxSeverity = Math.max(counts.low, counts.medium, counts.high, 1);
      severityBars.appendChild(barRow('Low', counts.low, maxSeverity, 'var(--low)'));
      severityBars.appendChild(barRow('Medium', counts.medium, maxSeverity, 'var(--medium)'));
      severityBars.appendChild(barRow('High', counts.high, maxSeverity, 'var(--high)'));

      const triggerBars = document.getElementById('trigger-bars');
      triggerBars.innerHTML = '';
      if (!stats.trigger_counts.length) {
        triggerBars.textContent = 'No entries yet.';
      } else {
        const maxTrigger = stats.trigger_counts[0].count;
        stats.trigger_counts.slice(0, 8).forEach((item) => {
          triggerBars.appendChild(barRow(titleCase(item.trigger), item.count, maxTrigger, 'var(--accent)'));
        });
      }

      renderTrendChart(stats.daily_average);
    };

    const renderTrendChart = (points) => {
      const chart = document.getElementById('trend-chart');
      if (!points.length) {
        chart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 240;
      const paddingX = 44;
      const paddingY = 34;
      const top = 20;

      const min = 1;
      const max = 3;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / (max - min);
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => (index === 0 ? 'M' : 'L') + ' ' + x(index).toFixed(2) + ' ' + y(point.avg_level).toFixed(2))
        .join(' ');

      let grid = '';
      [['1', 'Low'], ['2', 'Medium'], ['3', 'High']].forEach(([value, label]) => {
        const yPos = y(Number(value));
        grid += '<line class="chart-grid" x1="' + paddingX + '" y1="' + yPos + '" x2="' + (width - paddingX) + '" y2="' + yPos + '" />';
        grid += '<text class="chart-label" x="' + (paddingX - 10) + '" y="' + (yPos + 4) + '" text-anchor="end">' + label + '</text>';
      });

      const labelEvery = points.length > 8 ? Math.ceil(points.length / 8) : 1;
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) return '';
          return '<text class="chart-label" x="' + x(index) + '" y="' + (height - paddingY + 18) + '" text-anchor="middle">' + point.date.slice(5) + '</text>';
        })
        .join('');

      const circles = points
        .map((point, index) => '<circle class="chart-point" cx="' + x(index) + '" cy="' + y(point.avg_level) + '" r="4" />')
        .join('');

      chart.innerHTML = grid + '<path class="chart-line" d="' + path + '" />' + circles + xLabels;
    };

    const renderHistory = () => {
      const list = document.getElementById('history-list');
      const term = document.getElementById('search-box').value.trim().toLowerCase();
      list.innerHTML = '';

      const filtered = entries.filter((entry) => !term
        || entry.mood.toLowerCase().includes(term)
        || entry.primary_trigger.toLowerCase().includes(term));

      if (!filtered.length) {
        list.textContent = entries.length
          ? 'No entries match your search.'
          : 'No entries yet. Start tracking in the New Entry tab.';
        return;
      }

      filtered.slice().reverse().forEach((entry) => {
        const item = document.createElement('details');
        item.className = 'entry-item';

        const summary = document.createElement('summary');
        summary.innerHTML = '<span>' + titleCase(entry.primary_trigger) + ' - '
          + entry.timestamp.slice(0, 16).replace('T', ' ') + '</span>'
          + '<span class="pill" data-severity="' + entry.severity + '">' + entry.severity + '</span>';
        item.appendChild(summary);

        const body = document.createElement('div');
        body.className = 'body';

        const mood = document.createElement('p');
        mood.textContent = entry.mood;
        body.appendChild(mood);

        const advice = document.createElement('pre');
        advice.textContent = entry.advice;
        body.appendChild(advice);

        const insight = document.createElement('p');
        insight.textContent = entry.deep_insight;
        body.appendChild(insight);

        const music = document.createElement('p');
        music.textContent = 'Music: ' + entry.music_track;
        body.appendChild(music);

        if (entry.private_note) {
          const note = document.createElement('p');
          note.textContent = 'Private note: ' + entry.private_note;
          body.appendChild(note);
        }

        const meta = document.createElement('p');
        meta.textContent = 'Record ' + entry.record_id;
        body.appendChild(meta);

        const del = document.createElement('button');
        del.className = 'danger';
        del.type = 'button';
        del.textContent = 'Delete entry';
        del.addEventListener('click', () => deleteEntry(entry.record_id));
        body.appendChild(del);

        item.appendChild(body);
        list.appendChild(item);
      });
    };

    const deleteEntry = async (recordId) => {
      const res = await fetch('/api/entries/' + encodeURIComponent(recordId), { method: 'DELETE' });
      if (!res.ok && res.status !== 404) {
        setStatus(await res.text(), 'error');
        return;
      }
      setStatus('Entry deleted', 'ok');
      refresh().catch((err) => setStatus(err.message, 'error'));
    };

    const clearUser = async () => {
      const user = requireUser();
      if (!user) return;
      const res = await fetch('/api/entries?user_id=' + encodeURIComponent(user), { method: 'DELETE' });
      if (!res.ok) {
        setStatus(await res.text(), 'error');
        return;
      }
      const body = await res.json();
      setStatus('Removed ' + body.removed + ' entries', 'ok');
      refresh().catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('analyze-btn').addEventListener('click', () => {
      analyze().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('load-btn').addEventListener('click', () => {
      const user = requireUser();
      if (!user) return;
      refresh()
        .then(() => setStatus('Loaded journal for ' + user, 'ok'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('search-box').addEventListener('input', renderHistory);

    document.getElementById('export-btn').addEventListener('click', () => {
      const user = requireUser();
      if (!user) return;
      window.location.href = '/api/export?user_id=' + encodeURIComponent(user);
    });

    document.getElementById('clear-btn').addEventListener('click', () => {
      clearUser().catch((err) => setStatus(err.message, 'error'));
    });
  </script>
</body>
</html>
"##;
