pub const GALLERY_GRID: &str = r#"
.gallery-grid {
    display: grid;
    gap: 16px;
    grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
    padding: 16px;
}

.gallery-tile {
    padding: 12px;
    border-radius: 8px;
    box-shadow: 0 2px 8px rgba(0,0,0,0.15);
    transition: transform 0.3s ease;
}

.gallery-tile:hover {
    transform: scale(1.03);
}

.gallery-tile img {
    width: 100%;
    aspect-ratio: 1;
    object-fit: cover;
    border-radius: 6px;
    cursor: pointer;
}

.gallery-status {
    text-align: center;
    margin-top: 1rem;
}
"#;

pub const MODAL: &str = r#"
.modal-overlay {
    display: flex;
    align-items: center;
    justify-content: center;
    position: fixed;
    z-index: 10;
    left: 0;
    top: 0;
    width: 100%;
    height: 100%;
    background-color: rgba(0,0,0,0.8);
}

.modal-content {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
    max-width: 95%;
    max-height: 95%;
}

.modal-content img {
    max-width: 100%;
    max-height: 80vh;
    object-fit: contain;
    touch-action: pan-y;
    user-select: none;
}

.modal-controls {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-top: 8px;
    color: white;
}

.modal-controls button, .close {
    padding: 6px 12px;
    border: none;
    border-radius: 4px;
    font-size: 17px;
    cursor: pointer;
}

.close {
    position: absolute;
    top: -12px;
    right: -12px;
}
"#;

pub const UPLOAD_FORM: &str = r#"
.upload-form {
    display: flex;
    gap: 8px;
    padding: 16px;
}

.upload-form input[type=submit]:disabled {
    opacity: 0.6;
    cursor: progress;
}

.alert {
    margin: 0 16px;
    padding: 12px 16px;
    border-radius: 4px;
}

.alert-success {
    color: #0f5132;
    background-color: #d1e7dd;
}

.alert-danger {
    color: #842029;
    background-color: #f8d7da;
}
"#;

pub const STYLES: &str = constcat::concat!(GALLERY_GRID, MODAL, UPLOAD_FORM);
