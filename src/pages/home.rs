use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::scroll_reveal::ScrollRevealCard;
use crate::components::service_card::{CardVariant, ServiceCard};
use crate::components::word_pull_up::WordPullUp;
use crate::config;
use crate::links;

const ABOUT_BIO: &str = "Sou Vinícius Freitas, especialista em tráfego e automação. Saí do zero — Uber, concursos, CLT — até construir minha carreira em performance real e resultados consistentes.\n\nCriei o Método GAP com IA para formar gestores estratégicos, capazes de analisar, decidir e escalar como profissionais de alta performance.\n\nTudo o que ensino vem da prática diária na minha agência, aplicando processos que geram faturamento real para clientes todos os dias.";

#[function_component(Home)]
pub fn home() -> Html {
    let show_content = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Hold the card stack back briefly so the heading animation leads
    {
        let show_content = show_content.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::CONTENT_REVEAL_DELAY_MS, move || {
                    show_content.set(true);
                });
                timeout.forget();
                || ()
            },
            (),
        );
    }

    html! {
        <div class="link-page">
            <style>{PAGE_STYLE}</style>
            <div class="glow-backdrop"></div>
            <div class="page-container">
                <WordPullUp words="LINKS ÚTEIS DO VINI" class="page-heading" />

                <div class={classes!("card-stack", (*show_content).then(|| "visible"))}>
                    <ScrollRevealCard delay={100}>
                        <ServiceCard
                            title="Tráfego Pago"
                            description="Gestão de tráfego estratégica com IA, desenvolvida para levar sua empresa a um novo nível de faturamento."
                            button_text="AGENDAR REUNIÃO"
                            image_src={Some("/assets/levix-mkt.png".to_string())}
                            external_link={Some(config::SCHEDULING_URL.to_string())}
                        />
                    </ScrollRevealCard>

                    <ScrollRevealCard delay={200}>
                        <ServiceCard
                            title="Método GAP – Tráfego com IA"
                            description="Se torne um especialista em tráfego com IA."
                            button_text="EM BREVE"
                            image_src={Some("/assets/metodo-gap.png".to_string())}
                            show_lock={true}
                            is_locked={true}
                        />
                    </ScrollRevealCard>

                    <ScrollRevealCard delay={300}>
                        <ServiceCard
                            title="Mentoria Individual"
                            description="Me dê a mão e eu te mostro o método que me tirou de um trabalho exaustivo e me levou a ser Gestor de Tráfego de Alta Performance — faturando mais de 20k por mês, sem equipe e começando como iniciante."
                            button_text="QUERO PARTICIPAR"
                            image_src={Some("/assets/mentoria.png".to_string())}
                            external_link={Some(links::whatsapp_link(config::WHATSAPP_PHONE, config::MENTORSHIP_MESSAGE))}
                        />
                    </ScrollRevealCard>

                    <ScrollRevealCard delay={400}>
                        <ServiceCard
                            title="Quem sou EU?"
                            description="Clique no botão abaixo para entender de onde eu vim e como eu posso lhe ajudar a escalar suas operações e melhorar seus resultados."
                            button_text="QUERO SABER MAIS"
                            variant={CardVariant::Green}
                            image_src={Some("/assets/quem-sou-eu.png".to_string())}
                            popup_image={Some("/assets/quem-sou-eu.png".to_string())}
                            popup_description={Some(ABOUT_BIO.to_string())}
                        />
                    </ScrollRevealCard>
                </div>

                <footer class={classes!("page-footer", (*show_content).then(|| "visible"))}>
                    <a
                        href={config::INSTAGRAM_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="credit-link"
                    >
                        {"Powered by @mateus"}
                    </a>
                </footer>
            </div>
        </div>
    }
}

const PAGE_STYLE: &str = r#"
    body {
        margin: 0;
        background: #0a0a12;
        color: #f5f5f7;
        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    }
    .link-page {
        min-height: 100vh;
        position: relative;
        overflow-x: hidden;
        background-image:
            linear-gradient(rgba(148, 163, 184, 0.05) 1px, transparent 1px),
            linear-gradient(90deg, rgba(148, 163, 184, 0.05) 1px, transparent 1px);
        background-size: 40px 40px;
    }
    .glow-backdrop {
        position: absolute;
        top: 0;
        left: 50%;
        transform: translateX(-50%);
        width: 100%;
        max-width: 600px;
        height: 400px;
        background: radial-gradient(ellipse at center, hsla(270, 100%, 65%, 0.25) 0%, transparent 70%);
        filter: blur(64px);
        pointer-events: none;
    }
    .page-container {
        position: relative;
        width: 100%;
        max-width: 896px;
        margin: 0 auto;
        padding: 3rem 1.5rem;
        box-sizing: border-box;
    }
    .word-pull-up {
        margin: 0 0 3rem;
        text-align: center;
        font-weight: 700;
        letter-spacing: -0.02em;
    }
    .page-heading { font-size: 1.875rem; }
    @media (min-width: 768px) {
        .page-heading { font-size: 2.25rem; }
    }
    .pull-up-word {
        display: inline-block;
        padding-right: 8px;
        opacity: 0;
        transform: translateY(15px);
        animation: pull-up 0.3s ease-out forwards;
    }
    @keyframes pull-up {
        to { opacity: 1; transform: translateY(0); }
    }
    .card-stack {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.4s ease-out, transform 0.4s ease-out;
    }
    .card-stack.visible { opacity: 1; transform: translateY(0); }
    .scroll-reveal {
        opacity: 0;
        transform: translateY(48px);
        transition: opacity 0.5s ease-out, transform 0.5s ease-out;
        will-change: transform;
    }
    .scroll-reveal.visible { opacity: 1; transform: translateY(0); }
    .service-card {
        border-radius: 0.5rem;
        background: #12121c;
        overflow: hidden;
        padding: 1.5rem;
    }
    .glow-border-cyan {
        border: 1px solid rgba(34, 211, 238, 0.4);
        box-shadow: 0 0 24px rgba(34, 211, 238, 0.15);
    }
    .glow-border-green {
        border: 1px solid rgba(74, 222, 128, 0.4);
        box-shadow: 0 0 24px rgba(74, 222, 128, 0.15);
    }
    .card-layout {
        display: flex;
        gap: 1.5rem;
        align-items: stretch;
    }
    .card-body { flex: 1; }
    .card-title {
        margin: 0 0 0.75rem;
        font-size: 1.5rem;
        font-weight: 700;
    }
    .card-title.accent { color: #4ade80; }
    .card-description {
        margin: 0;
        color: #9ca3af;
        font-size: 0.875rem;
        line-height: 1.625;
    }
    .highlight { font-weight: 700; }
    .highlight-cyan { color: #22d3ee; }
    .highlight-green { color: #4ade80; }
    .card-actions { margin-top: 1.5rem; }
    .card-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        font-size: 0.875rem;
        font-weight: 600;
        text-transform: uppercase;
        letter-spacing: 0.08em;
        cursor: pointer;
        transition: filter 0.2s ease;
    }
    .card-button:hover { filter: brightness(1.1); }
    .button-cyan { background: #0e7490; color: #e0feff; }
    .button-green { background: #15803d; color: #e8ffee; }
    .card-button.locked { cursor: not-allowed; opacity: 0.8; }
    .card-button.shake { animation: shake 0.5s ease-in-out; }
    @keyframes shake {
        0%, 100% { transform: translateX(0); }
        20% { transform: translateX(-6px); }
        40% { transform: translateX(6px); }
        60% { transform: translateX(-4px); }
        80% { transform: translateX(4px); }
    }
    .button-icon { font-size: 1rem; line-height: 1; }
    .card-media {
        position: relative;
        min-height: 200px;
        flex: 1;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 0.5rem;
    }
    .card-image { width: 100%; height: 100%; object-fit: contain; }
    .lock-overlay {
        position: absolute;
        inset: 0;
        background: rgba(10, 10, 18, 0.6);
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .lock-badge {
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        background: rgba(39, 39, 58, 0.8);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.4);
        animation: lock-pulse 2s ease-in-out infinite;
    }
    @keyframes lock-pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.6; }
    }
    .image-edge-glow {
        position: absolute;
        top: 0;
        bottom: 0;
        right: 0;
        width: 6rem;
        background: linear-gradient(to left, rgba(34, 211, 238, 0.3), rgba(34, 211, 238, 0.1), transparent);
        pointer-events: none;
    }
    .image-placeholder {
        width: 4rem;
        height: 4rem;
        border-radius: 0.5rem;
        border: 2px solid;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .placeholder-cyan { border-color: rgba(34, 211, 238, 0.3); }
    .placeholder-cyan .placeholder-inner { background: rgba(34, 211, 238, 0.2); }
    .placeholder-green { border-color: rgba(74, 222, 128, 0.3); }
    .placeholder-green .placeholder-inner { background: rgba(74, 222, 128, 0.2); }
    .placeholder-inner { width: 2rem; height: 2rem; border-radius: 0.25rem; }
    .modal-overlay {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.7);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 1000;
        padding: 1rem;
    }
    .modal-content.popup-card {
        position: relative;
        width: 100%;
        max-width: 28rem;
        background: rgba(18, 18, 28, 0.7);
        backdrop-filter: blur(24px);
        border: 1px solid rgba(74, 222, 128, 0.2);
        border-radius: 1.5rem;
        box-shadow: 0 24px 48px rgba(74, 222, 128, 0.2);
        padding: 2rem 1.5rem;
    }
    .modal-close {
        position: absolute;
        top: 0.75rem;
        right: 1rem;
        background: none;
        border: none;
        color: #9ca3af;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .modal-close:hover { color: #f5f5f7; }
    .popup-title {
        margin: 0.5rem 0 0;
        text-align: center;
        color: #4ade80;
        font-size: 1.25rem;
        font-weight: 600;
    }
    .popup-body {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.25rem;
        padding: 0.5rem 0;
    }
    .popup-portrait-wrap { position: relative; margin-top: 1rem; }
    .popup-portrait-wrap::before {
        content: '';
        position: absolute;
        inset: 0;
        border-radius: 50%;
        background: rgba(74, 222, 128, 0.2);
        filter: blur(24px);
        transform: scale(1.1);
    }
    .popup-portrait {
        position: relative;
        width: 8rem;
        height: 8rem;
        border-radius: 50%;
        object-fit: cover;
        border: 2px solid rgba(74, 222, 128, 0.4);
        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.4);
    }
    .popup-description {
        margin: 0;
        padding: 0 0.5rem;
        color: #9ca3af;
        text-align: center;
        font-size: 0.875rem;
        line-height: 1.625;
        white-space: pre-line;
    }
    .page-footer {
        margin-top: 3rem;
        padding-bottom: 1rem;
        text-align: center;
        opacity: 0;
        transition: opacity 0.3s ease-out 0.2s;
    }
    .page-footer.visible { opacity: 1; }
    .credit-link {
        font-size: 0.75rem;
        color: rgba(156, 163, 175, 0.5);
        text-decoration: none;
        transition: color 0.2s ease;
    }
    .credit-link:hover { color: #9ca3af; }
    @media (max-width: 640px) {
        .card-layout { flex-direction: column; }
        .card-media { min-height: 160px; }
    }
"#;
