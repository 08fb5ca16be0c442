use axum::response::{Html, IntoResponse};

// Location picker as used by the listing forms: debounced input, stale
// responses dropped, suggestion dropdown.
pub async fn serve_index() -> impl IntoResponse {
    let html = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>YourRoom - Ubicación</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
            max-width: 560px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        h1 {
            color: #2c3e50;
            text-align: center;
        }
        .card {
            border: 1px solid #ddd;
            border-radius: 8px;
            padding: 20px;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
            position: relative;
        }
        label {
            display: block;
            font-weight: 600;
            margin-bottom: 8px;
        }
        input {
            width: 100%;
            box-sizing: border-box;
            padding: 12px;
            font-size: 16px;
            border: 1px solid #ccc;
            border-radius: 6px;
        }
        .suggestions {
            list-style: none;
            margin: 4px 0 0;
            padding: 0;
            border: 1px solid #ddd;
            border-radius: 6px;
            background: #fff;
            max-height: 320px;
            overflow-y: auto;
        }
        .suggestions:empty {
            display: none;
        }
        .suggestions li {
            padding: 10px 12px;
            cursor: pointer;
            border-bottom: 1px solid #eee;
        }
        .suggestions li:last-child {
            border-bottom: none;
        }
        .suggestions li:hover {
            background-color: #e3f2fd;
        }
        .selected {
            margin-top: 16px;
            color: #2c3e50;
        }
        .error {
            color: #c0392b;
            margin-top: 8px;
        }
    </style>
</head>
<body>
    <h1>YourRoom</h1>
    <div class="card">
        <label for="location">Ubicación del espacio</label>
        <input id="location" type="text" autocomplete="off" placeholder="Escribe un municipio...">
        <ul id="suggestions" class="suggestions"></ul>
        <div id="error" class="error"></div>
        <div id="selected" class="selected"></div>
    </div>

    <script>
        const DEBOUNCE_MS = 250;
        const input = document.getElementById('location');
        const list = document.getElementById('suggestions');
        const errorBox = document.getElementById('error');
        const selected = document.getElementById('selected');
        let timer = null;
        let latest = 0;

        function render(items) {
            list.innerHTML = '';
            for (const item of items) {
                const li = document.createElement('li');
                li.textContent = item.label;
                li.addEventListener('click', () => {
                    input.value = item.label;
                    list.innerHTML = '';
                    selected.textContent = `Seleccionado: ${item.name} · ${item.provinceName} (${item.provinceCode}${item.code ? ' / ' + item.code : ''})`;
                });
                list.appendChild(li);
            }
        }

        async function lookup(query, ticket) {
            try {
                const response = await fetch(`/api/municipalities?q=${encodeURIComponent(query)}`);
                const body = await response.json();
                if (ticket !== latest) {
                    return;
                }
                if (!response.ok) {
                    errorBox.textContent = body.error || 'No se pudo cargar la lista de municipios';
                    render([]);
                    return;
                }
                errorBox.textContent = '';
                render(body);
            } catch (e) {
                if (ticket === latest) {
                    errorBox.textContent = 'Error de red';
                }
            }
        }

        input.addEventListener('input', () => {
            clearTimeout(timer);
            const query = input.value;
            const ticket = ++latest;
            timer = setTimeout(() => lookup(query, ticket), DEBOUNCE_MS);
        });
    </script>
</body>
</html>"#;

    Html(html)
}
