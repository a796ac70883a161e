use crate::models::StatsResponse;
use crate::mood;

pub fn render_index(stats: &StatsResponse) -> String {
    INDEX_HTML
        .replace("{{TOTAL_ENTRIES}}", &stats.total_entries.to_string())
        .replace("{{TOTAL_GOALS}}", &stats.total_goals.to_string())
        .replace("{{COMPLETED_GOALS}}", &stats.completed_goals.to_string())
        .replace("{{GOALS_PROGRESS}}", &stats.goals_progress.to_string())
        .replace("{{CURRENT_MOOD}}", &mood_display(&stats.current_mood))
}

fn mood_display(current: &str) -> String {
    // currentMood is either a glyph already (no dated entries, or a blank
    // mood) or a normalized label worth pairing with its glyph.
    if current == mood::NEUTRAL_GLYPH || current == mood::UNKNOWN_GLYPH {
        current.to_string()
    } else {
        format!("{} {}", mood::glyph(current), current)
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Journal</title>
  <style>
    :root {
      --bg: #f6f2ea;
      --ink: #2b2a28;
      --accent: #7a5ea8;
      --card: #ffffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px;
    }

    .app {
      width: min(900px, 100%);
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: 2rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 14px;
    }

    .stat {
      background: var(--card);
      border-radius: 14px;
      padding: 16px;
      border: 1px solid rgba(43, 42, 40, 0.08);
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
    }

    .stat .value {
      display: block;
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
    }

    .card {
      background: var(--card);
      border-radius: 14px;
      padding: 16px;
      border: 1px solid rgba(43, 42, 40, 0.08);
    }

    .card h2 {
      margin: 0 0 10px;
      font-size: 1.2rem;
    }

    #calendar {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(120px, 1fr));
      gap: 8px;
    }

    .day-cell {
      border: 1px solid rgba(43, 42, 40, 0.1);
      border-radius: 10px;
      padding: 8px;
      font-size: 0.9rem;
    }

    .day-cell .more {
      color: #8b857d;
      font-size: 0.8rem;
    }

    .note {
      padding: 8px 0;
      border-bottom: 1px solid rgba(43, 42, 40, 0.08);
    }

    .note .when {
      color: #8b857d;
      font-size: 0.8rem;
      margin-right: 8px;
    }

    .empty {
      color: #8b857d;
    }

    .mood-row {
      display: flex;
      justify-content: space-between;
      padding: 4px 0;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Mood Journal</h1>

    <section class="panel">
      <div class="stat">
        <span class="label">Entries</span>
        <span class="value">{{TOTAL_ENTRIES}}</span>
      </div>
      <div class="stat">
        <span class="label">Current mood</span>
        <span class="value">{{CURRENT_MOOD}}</span>
      </div>
      <div class="stat">
        <span class="label">Goals</span>
        <span class="value">{{COMPLETED_GOALS}} / {{TOTAL_GOALS}}</span>
      </div>
      <div class="stat">
        <span class="label">Goal progress</span>
        <span class="value">{{GOALS_PROGRESS}}%</span>
      </div>
    </section>

    <section class="card">
      <h2 id="month-title">This month</h2>
      <div id="calendar"></div>
    </section>

    <section class="card">
      <h2>Mood distribution</h2>
      <div id="distribution"></div>
    </section>

    <section class="card">
      <h2>Gratitude board</h2>
      <div id="gratitude"></div>
    </section>
  </main>

  <script>
    const glyphs = {
      happy: '😊', sad: '😢', angry: '😠', anxious: '😰', calm: '😌',
      tired: '😴', neutral: '😐', excited: '🤩', frustrated: '😤', peaceful: '🕊️'
    };
    const glyph = (mood) => glyphs[mood] || '❓';

    const loadCalendar = async () => {
      const el = document.getElementById('calendar');
      const res = await fetch('/api/calendar');
      if (!res.ok) return;
      const cells = await res.json();
      const dates = Object.keys(cells);
      if (dates.length === 0) {
        el.innerHTML = '<p class="empty">No entries this month.</p>';
        return;
      }
      el.innerHTML = '';
      for (const date of dates) {
        const cell = cells[date];
        const badges = cell.badges.map(glyph).join(' ');
        const more = cell.extraMoods > 0 ? `<span class="more">+${cell.extraMoods}</span>` : '';
        const div = document.createElement('div');
        div.className = 'day-cell';
        div.innerHTML = `<div>${date.slice(8)} ${glyph(cell.primaryMood)}</div><div>${badges} ${more}</div>`;
        el.appendChild(div);
      }
    };

    const loadDistribution = async () => {
      const el = document.getElementById('distribution');
      const res = await fetch('/api/stats');
      if (!res.ok) return;
      const stats = await res.json();
      const moods = Object.entries(stats.moodDistribution);
      if (moods.length === 0) {
        el.innerHTML = '<p class="empty">No mood data yet.</p>';
        return;
      }
      el.innerHTML = moods
        .map(([mood, count]) => `<div class="mood-row"><span>${glyph(mood)} ${mood}</span><span>${count}</span></div>`)
        .join('');
    };

    const loadGratitude = async () => {
      const el = document.getElementById('gratitude');
      const res = await fetch('/api/gratitude');
      if (!res.ok) return;
      const notes = await res.json();
      if (notes.length === 0) {
        el.innerHTML = '<p class="empty">Nothing here yet.</p>';
        return;
      }
      el.innerHTML = '';
      for (const note of notes) {
        const div = document.createElement('div');
        div.className = 'note';
        const when = document.createElement('span');
        when.className = 'when';
        when.textContent = note.date;
        const text = document.createElement('span');
        text.textContent = note.text;
        div.appendChild(when);
        div.appendChild(text);
        el.appendChild(div);
      }
    };

    loadCalendar();
    loadDistribution();
    loadGratitude();
  </script>
</body>
</html>
"#;
