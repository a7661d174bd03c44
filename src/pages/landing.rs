use log::{debug, warn};
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::calculator_panel::CalculatorPanel;
use crate::components::fallback_image::FallbackImage;
use crate::components::nav::Nav;
use crate::components::popup_overlay::PopupOverlay;
use crate::config;
use crate::events::{binding, dispatch, Command, UiEvent, UiEventKind};
use crate::popup::{OverlayId, PopupManager};
use crate::reveal::use_reveal_on_scroll;
use crate::scroll::scroll_to_fragment;

fn execute(command: Command, popups: &UseReducerHandle<PopupManager>) {
    match command {
        Command::Popup(action) => popups.dispatch(action),
        Command::ScrollTo(hash) => {
            if let Err(e) = scroll_to_fragment(&hash) {
                warn!("Could not scroll to {}: {}", hash, e);
            }
        }
        Command::Calculate | Command::Nothing => {}
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let popups = use_reducer(|| PopupManager::new(&config::OVERLAYS));

    {
        let popups = popups.clone();
        use_effect_with_deps(
            move |_| {
                for id in popups.ids() {
                    debug!("Registered overlay {}", id.dom_id());
                }
                || ()
            },
            (),
        );
    }

    use_reveal_on_scroll();

    let on_command = {
        let popups = popups.clone();
        Callback::from(move |command: Command| execute(command, &popups))
    };

    {
        let on_command = on_command.clone();
        use_event_with_window(binding(UiEventKind::KeyDown).event, move |e: KeyboardEvent| {
            on_command.emit(dispatch(&UiEvent::KeyDown { key: e.key() }).command);
        });
    }

    let open_calculator = on_command.reform(|_: MouseEvent| dispatch(&UiEvent::OpenCalculator).command);

    html! {
        <div class="landing-page">
            <Nav on_command={on_command.clone()} />

            <header class="hero">
                <div class="hero-content fade-in">
                    <h1>{"Luzion"}</h1>
                    <p class="hero-subtitle">
                        {"Mobilidade elétrica pensada para o dia a dia. Menos custos, zero emissões no escape."}
                    </p>
                    <button
                        id={binding(UiEventKind::OpenCalculator).element_id()}
                        class="hero-cta"
                        onclick={open_calculator.clone()}
                    >
                        {"Calcule a sua poupança"}
                    </button>
                </div>
            </header>

            <section id="about" class="feature-block">
                <div class="feature-content slide-up">
                    <h2>{"Sobre o Luzion"}</h2>
                    <p>{"Um veículo elétrico compacto, com 100 km de autonomia por carga e um consumo de apenas 10 kWh aos 100 km."}</p>
                </div>
                <FallbackImage src="/assets/about.webp" alt="Luzion estacionado na cidade" class={classes!("about-img")} />
            </section>

            <section id="design" class="feature-block reverse">
                <FallbackImage src="/assets/design.webp" alt="Linhas exteriores do Luzion" class={classes!("design-img")} />
                <div class="feature-content slide-up">
                    <h2>{"Design"}</h2>
                    <p>{"Linhas limpas, interior luminoso e materiais reciclados em todas as superfícies de contacto."}</p>
                </div>
            </section>

            <section id="industry" class="feature-block">
                <div class="feature-content slide-up">
                    <h2>{"Indústria"}</h2>
                    <p>{"Produzido em Portugal, com baterias recondicionadas e uma cadeia de fornecimento local."}</p>
                </div>
                <FallbackImage src="/assets/industry.webp" alt="Linha de montagem do Luzion" class={classes!("industry-img")} />
            </section>

            <section id="vantagens" class="advantages">
                <h2 class="fade-in">{"Vantagens"}</h2>
                <div class="advantages-grid">
                    <div class="advantage slide-up">
                        <FallbackImage src="/assets/vantagens-custo.webp" alt="Moedas" class={classes!("vantagens-img")} />
                        <h3>{"Custo por quilómetro"}</h3>
                        <p>{"Carregar em casa custa uma fração de um depósito de combustível."}</p>
                    </div>
                    <div class="advantage slide-up">
                        <FallbackImage src="/assets/vantagens-ambiente.webp" alt="Folhas verdes" class={classes!("vantagens-img")} />
                        <h3>{"Sem emissões locais"}</h3>
                        <p>{"Cada litro de gasolina evitado são 2,31 kg de CO₂ a menos."}</p>
                    </div>
                    <div class="advantage slide-up">
                        <FallbackImage src="/assets/vantagens-manutencao.webp" alt="Ferramentas" class={classes!("vantagens-img")} />
                        <h3>{"Manutenção simples"}</h3>
                        <p>{"Menos peças móveis, menos visitas à oficina."}</p>
                    </div>
                </div>
                <button class="hero-cta" onclick={open_calculator}>{"Abrir calculadora"}</button>
            </section>

            <footer class="footer">
                <p>{"© Luzion"}</p>
            </footer>

            <PopupOverlay
                id={OverlayId::Contact}
                active={popups.is_active(OverlayId::Contact)}
                on_command={on_command.clone()}
            >
                <div class="contact">
                    <h2>{"Fale connosco"}</h2>
                    <p>{"Marque um test drive ou peça uma proposta para a sua frota."}</p>
                    <p><a href="mailto:info@luzion.pt">{"info@luzion.pt"}</a></p>
                    <p><a href="tel:+351210000000">{"+351 210 000 000"}</a></p>
                </div>
            </PopupOverlay>

            <PopupOverlay
                id={OverlayId::Calculator}
                active={popups.is_active(OverlayId::Calculator)}
                on_command={on_command}
            >
                <CalculatorPanel />
            </PopupOverlay>

            <style>
                {r#"
                .landing-page {
                    color: #ffffff;
                    background: #010f22;
                    font-family: Poppins, sans-serif;
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 10;
                    background: rgba(1, 33, 71, 0.85);
                    backdrop-filter: blur(10px);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    color: #7aafff;
                    font-size: 1.5rem;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                }

                .nav-links a {
                    color: #ffffff;
                    text-decoration: none;
                }


                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: linear-gradient(180deg, #012147 0%, #010f22 100%);
                }

                .hero-cta, .calc-button {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 8px;
                    background: #7aafff;
                    color: #012147;
                    font-size: 1.1rem;
                    cursor: pointer;
                }

                .feature-block {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    display: flex;
                    gap: 4rem;
                    align-items: center;
                }

                .feature-block img, .advantage img {
                    width: 100%;
                    max-width: 520px;
                    border-radius: 12px;
                }

                .advantages {
                    padding: 6rem 2rem;
                    text-align: center;
                }

                .advantages-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto 3rem;
                }

                .fade-in, .design-img, .about-img, .industry-img {
                    opacity: 0;
                    transition: opacity 0.8s ease;
                }

                .slide-up {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .fade-in.visible, .design-img.visible, .about-img.visible,
                .industry-img.visible, .slide-up.visible {
                    opacity: 1;
                    transform: none;
                }

                .popup-overlay {
                    display: none;
                    position: fixed;
                    inset: 0;
                    z-index: 20;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.7);
                }

                .popup-overlay.active {
                    display: flex;
                }

                .popup-content {
                    position: relative;
                    max-width: 720px;
                    width: 90%;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 2.5rem;
                    border-radius: 12px;
                    background: #012147;
                }

                .close-popup {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #7aafff;
                    font-size: 1.8rem;
                    cursor: pointer;
                }

                .calc-fields {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .calc-field label {
                    display: block;
                    margin-bottom: 0.4rem;
                    color: #7aafff;
                }

                .calc-field input {
                    width: 100%;
                    padding: 0.6rem;
                    border-radius: 6px;
                    border: 1px solid rgba(122, 175, 255, 0.4);
                    background: rgba(1, 15, 34, 0.6);
                    color: #ffffff;
                }

                .calc-results {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .result-card {
                    padding: 1rem;
                    border-radius: 8px;
                    background: rgba(122, 175, 255, 0.1);
                    display: flex;
                    flex-direction: column;
                    gap: 0.3rem;
                }

                .result-card.pulse {
                    animation: resultPulse 0.5s ease;
                }

                .result-value {
                    font-size: 1.4rem;
                }

                @keyframes resultPulse {
                    0% { transform: scale(1); }
                    50% { transform: scale(1.05); }
                    100% { transform: scale(1); }
                }

                @media (max-width: 968px) {
                    .feature-block {
                        flex-direction: column;
                        padding: 4rem 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
