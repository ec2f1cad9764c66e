//! Narrative content of the report, in page order.

use crate::models::{Block, ImageRef, Section};
use crate::report::charts::{admin_expense_chart, balance_income_chart};

/// All sections, top to bottom.
pub fn sections() -> Vec<Section> {
    vec![
        header(),
        capital_reserve(),
        civil_association(),
        fiduciary_risk(),
        management_contract(),
        billing_discrepancies(),
        spending(),
        concierge_service(),
        operating_protocols(),
        article_31(),
        delegated_duties(),
        conclusion(),
    ]
}

fn collapsible(title: &str, blocks: Vec<Block>) -> Section {
    Section::Collapsible {
        title: title.to_string(),
        expanded: false,
        blocks,
    }
}

fn header() -> Section {
    Section::Header {
        title: "🏡Análisis de Gestión y Finanzas".to_string(),
        icon: None,
        blocks: vec![
            Block::markdown(
                r#"
Nos dirigimos a ustedes para compartir un **análisis** sobre la gestión dentro de la Privada Parma.

La preocupación central, y la más grave, es la persistente **ausencia de la Asociación Civil (AC)** legalmente constituida para la Mesa Directiva.
"#,
            ),
            Block::warning(
                "🛑",
                "Como resultado, de acuerdo a las reglas del desarrollador **hemos perdido el Fondo Convive**.",
            ),
            Block::markdown(
                "La cuenta bancaria de la Privada Parma, cuyo saldo ha crecido considerablemente, permanece bajo la **titularidad exclusiva de la Administración**—cuya gestión, cabe destacar, ha 'brillado' por su opacidad e irregularidades.",
            ),
            Block::warning(
                "🛑",
                "Esto nos expone a un riesgo inaceptable de pérdida total del capital.",
            ),
            Block::markdown(
                "Se realizó un análisis de los Estados Financieros y de comentarios recabados de varios vecinos, con el propósito de presentar una **evaluación objetiva** de la gestión administrativa y financiera reciente, centrando en las **desviaciones legales y normativas** y las **inconsistencias operativas** en la Privada Parma.",
            ),
            Block::markdown(
                "**Nota de Metodología:** La totalidad de los datos e información financiera citada en este informe ha sido extraída de la sección *Documentos → Estados Financieros* de la plataforma administrativa **Neivor** con los Estados Financieros de Enero 2024 a Junio 2025 que es lo que se cuenta.",
            ),
        ],
    }
}

fn capital_reserve() -> Section {
    collapsible(
        "💰 Análisis de la Reserva Patrimonial y la Revaluación de la Cuota",
        vec![
            Block::markdown(
                r#"
    * **Crecimiento de Capital:** Se documenta un crecimiento constante en el saldo de las cuentas, con una acumulación promedio mensual de aproximadamente **$35,000** desde octubre de 2024.
    * Se considera que el nivel actual de capitalización de reserva **obliga a una revisión del pago mensual de la cuota de mantenimiento**. Se exige la presentación formal de un plan de inversión o una justificación presupuestaria específica que demuestre la necesidad de mantener este superávit de capital no programado.
    "#,
            ),
            Block::warning(
                "🛑",
                "Este excedente representa un **ahorro estimado de $280** por propietario al mes tomando en cuenta la media de gastos fijos de Diciembre 2024 a Junio 2025,",
            ),
            Block::markdown(
                "**Adicionalmente, se requiere que la nueva estructura de cuotas asegure que el pago mensual no sea utilizado para cubrir los adeudos o impagos de aquellos vecinos que presenten morosidad ya que el capital excedente debe cubrir casos extraordinarios unicamente, manteniendo una estricta separación entre la tesorería operativa y la gestión de cobranza.**",
            ),
            Block::Chart(balance_income_chart()),
        ],
    )
}

fn civil_association() -> Section {
    collapsible(
        "🐢 Revisión de Plazos y Presupuesto para la Asociación Civil (AC)",
        vec![
            Block::markdown(
                "* **Perdida Fondo Convive:** La demora de más de quince (15) meses por parte de la Mesa Directiva en la constitución de la Asociación Civil (AC), atribuida a normativas internas del desarrollador, resulta en la **pérdida de acceso al Fondo Convive**. Debemos estar felices de perder ese fondo. Lo mejor es seguir pagando de más cuotas mensuales y tener cuotas extraordinarias.",
            ),
            Block::warning(
                "⚠️",
                "Esta situación implica la lamentable renuncia a un recurso de 265,000.00 pesos destinado a mejoras en nuestra privada.",
            ),
            Block::markdown(
                "* **Discrepancia Presupuestaria:** El capital solicitado hasta el momento ha sido de **76,827.86 pesos** para la creación de la AC. Dado que los costos notariales promedio son de 15,000.00 pesos, se requiere la **desagregación detallada y justificación** de los más de **$60,000 adicionales** solicitados, así como el cronograma de trabajo para finalizar el trámite.",
            ),
        ],
    )
}

fn fiduciary_risk() -> Section {
    collapsible(
        "⚠️ Riesgo Fiduciario por Estructura de Titularidad de Cuentas",
        vec![Block::markdown(
            r#"
* **Titularidad a Nombre de Tercero:** Los fondos del condominio están, por decisión administrativa, a nombre de la **Administración** (un tercero).
* **Riesgo Declarado:** Un vecino documentó la declaración de La Mesa Directiva  sugiriendo que la Administración **"buscaría perjudicarnos"** en caso de conflicto. Mantener los activos bajo la titularidad de un tercero con un riesgo de conflicto declarado es una violación de la **sana gestión** y expone innecesariamente el patrimonio de los propietarios.
"#,
        )],
    )
}

fn management_contract() -> Section {
    collapsible(
        "📜 Inconsistencia en la Justificación de la Continuidad del Contrato de Administración",
        vec![Block::markdown(
            r#"
Se han proporcionado **justificaciones inconsistentes** sobre la imposibilidad de sustituir al actual proveedor de Administración:

* **Contrato Inaccesible:** Se invocó una **cláusula contractual** como impedimento para el cambio. No obstante, el documento contractual clave para la toma de decisiones es **ilocalizable** por el Consejo, quedando bajo la custodia exclusiva de la Administración.
* **Asociación Civil (AC) Pendiente:** Minutos después, se modificó la justificación, indicando que la falta de constitución de la AC es el factor que impide la contratación de un nuevo proveedor.

La contradicción entre ambas justificaciones, sumada al contrato no disponible y la demora de **más de quince meses** en la constitución de la AC, sugiere una **inmovilidad administrativa** en el proceso de evaluación y cambio.

Un interesado ha intentado rastrear el contrato, en Ruba solo existe un contrato ya expirado con el cual la administración se intenta amparar.

**¿Ustedes permitirían que el  prestador de servicios sea el único que posea el contrato? Bastante ventajoso de su parte.**
"#,
        )],
    )
}

fn billing_discrepancies() -> Section {
    collapsible(
        "5. ⚠️ Discrepancias en Cobros, Mora y Conciliación de Saldos en Plataforma Neivor y Estados financieros",
        vec![
            Block::markdown(
                r#"
Se han detectado **inconsistencias  recurrentes** en la conciliación de los balances financieros. Por lo que se solicita una clarificación y justificación inmediata sobre los siguientes movimientos y saldos reportados en los Estados Financieros, que no son los únicos bajo escrutinio:
* **La cuenta de Banjio donde se tiene el capital de la Privada Parma no cumple con la Ley de Condominios**, se pide esclarecer este cambio de cuenta ya que la cuenta anterior en Inbursa si cumplía.
* **Traspaso por Cambio de Cuenta (Sep 2024):** En el reporte de gastos variables de Septiembre 2024, se registra el concepto **"Traspaso por cambio de cuenta"** por **$8,384.24** como un egreso. Se requiere aclarar esta anotación, ya que el proceso de cambio de cuenta (de Inbursa a Banregio) se gestionó realizando gastos desde la cuenta antigua (Inbursa) mientras los nuevos depósitos se dirigían a la cuenta nueva (Banregio). El concepto de "traspaso" por ese monto como **"gasto"** necesita ser justificado. Por cierto, el poco dinero sobrante de la cuenta anterior no fue usado completamente y 'maquillo' para que los Estados Financieros cuadren, les cobraron el Traspaso y se quedaron con su dinero 😂.

* **Conciliación de Saldos (Ago/Oct 2024 y Abril 2045):** Se han detectado discrepancias en la conciliación de saldos iniciales y finales reportados en los Estados Financieros de **Agosto a Septiembre 2024**, de **Septiembre a Octubre 2024** y de **Marzo a Abril 2025**. Los saldos iniciales de un mes no coinciden con los saldos finales del mes anterior, lo que indica un error fundamental en la cuadratura de los informes.

* **Doble Asiento de Jardinería:** Se exige la aclaración del concepto **"DEVOLUCION DE PAGO JARDINERA"** en Noviembre 2024, que figura simultáneamente como **ingreso y egreso** en el mismo periodo. Esta transacción coexiste con otro egreso bajo el concepto **"JARDINERIA"**, lo que complica la trazabilidad del gasto real y exige la presentación de documentación de respaldo.

* **Falta de Información Completa:** Se reitera la necesidad de obtener el **Estado Financiero Completo de Octubre 2024** y los Estados Financieros de Julio 2025 a la fecha para realizar la auditoría de estos periodos.
"#,
            ),
            Block::image("Jardineria.jpeg", "Conceptos de Jardinería"),
            Block::Divider,
            Block::markdown(
                r#"
Se han identificado graves inconsistencias entre los cargos reflejados en la plataforma de cobro **Neivor** y los Estados Financieros oficiales, lo que compromete la exactitud del saldo real del condominio.

* **Inconsistencia entre Neivor y Estados Financieros:** Se ha descubierto que los montos de cobro registrados en la aplicación **Neivor** no cuadran de forma consistente con los reportes de los **Estados Financieros**. Esta disparidad es crítica, ya que sugiere que el dinero recaudado a través del sistema de cobros podría no estar siendo contabilizado completamente en las cuentas formales.
"#,
            ),
            Block::warning(
                "⚠️",
                "Lo que representa un riesgo grave de **pérdida o desvío de capital.**",
            ),
            Block::markdown(
                "* **Variabilidad Injustificada en Cuotas:** Los cobros por cada concepto en la aplicación Neivor varían sin justificación aparente mes a mes, y se han encontrado diferencias en las cuotas aplicadas entre vecinos para los mismos conceptos. Esta inconsistencia operativa viola el principio de equidad y estandarización en la recaudación de mantenimiento.",
            ),
            Block::Columns {
                images: vec![
                    ImageRef::new(
                        "estado_neivor_1.jpeg",
                        "Inconsistencia contable, el cobro por el concepto Seguridad es diferente a otros vecinos",
                    ),
                    ImageRef::new(
                        "estado_neivor_2.jpeg",
                        "Inconsistencia contable, el cobro por el concepto Seguridad es diferente a otros vecinos y los cobros son diferentes",
                    ),
                ],
            },
        ],
    )
}

fn spending() -> Section {
    collapsible(
        "💸 El dinero se va volando con decisiones poco claras",
        vec![
            Block::markdown(
                r#"
* **Justifiación del costo de servicio:** Durante el presente año, y a pesar de una notable deficiencia en la prestación de servicios, se ha autorizado un incremento superior al 78% en el costo de los mismos. El interrogante que se plantea es el siguiente: ¿Se ha observado una mejora en la calidad del servicio? Los puntos pendientes de cumplimiento solo comenzaron a ser atendidos tras la exigencia de convocar a una asamblea, que por cierto, tomó más de un mes la solicitud de asamblea.

### Evolución del Gasto de Administración (Incremento del 78%)
"#,
            ),
            Block::Chart(admin_expense_chart()),
        ],
    )
}

fn concierge_service() -> Section {
    collapsible(
        "👥 Evaluación del Servicio de Portería",
        vec![Block::markdown(
            r#"
* **Incremento Tarifario No Vinculado al Servicio:** Se confirmó durante asamblea que el servicio de portería entregado fue  **incompleto** durante un periodo de "demo". Cinco meses después de empezar a prestar servicios y con meses de servicio incompletos, se aplicó un ajuste de precio por **"inflación"**. El incremento tarifario desvinculado de la calidad del servicio previamente reconocido como deficiente es una **decisión financiera que requiere ser justificada**.
* **Vigilancia y Rondines:** La ausencia de la cuatrimoto que fue ofrecida desde un inicio fue justificada por la presencia de **"un vehículo de supervisión para pasar lista"**. Esta explicación sustituye la función de **vigilancia activa** (rondines) por la de **control horario**, lo cual no atiende la necesidad ni la intencion original.
* **Conflicto de intereses:** Algunos vecinos han observado un conflicto de intereses con la prestación de servicios de portería y mantenimientos correctivos dentro de la Privada Parma.
"#,
        )],
    )
}

fn operating_protocols() -> Section {
    collapsible(
        "📄 Incumplimiento en la Entrega de Protocolos Operacionales de Portería",
        vec![Block::markdown(
            r#"
Se reitera la solicitud formal, pendiente desde hace **casi un año**, referente a la entrega y publicación de los protocolos operativos que rigen el servicio de portería.

* **Compromiso Incumplido:** La Administración se comprometió a formalizar y divulgar las consignas específicas para el control de acceso, manejo de paquetería, registro de visitantes y procedimientos de emergencia. Este compromiso se mantiene sin atender.
* **Riesgo Operacional:** La ausencia de protocolos operativos escritos y avalados por el Consejo implica que el personal de vigilancia opera bajo directrices informales o variables. Esto genera un **riesgo de seguridad y operacional** al impedir la auditoría de procedimientos y la estandarización del servicio de vigilancia.
* **Requerimiento:** Se exige la entrega inmediata de los protocolos completos o la documentación oficial que justifique de forma explícita el retraso continuado.
"#,
        )],
    )
}

fn article_31() -> Section {
    collapsible(
        "⚖️ Incumplimiento Sistemático al Marco Legal (Artículo 31)",
        vec![
            Block::markdown(
                r#"
La Administración ha demostrado un **incumplimiento constante y repetido** de sus deberes legales,
tal como lo exige el **Artículo 31 de la Ley de Propiedad en Condominio en el Estado de México**.

Esto afecta gravemente la **transparencia** y la **legalidad** con la que se maneja nuestra comunidad.
"#,
            ),
            Block::Divider,
            Block::subheading("1. 📁 No entregan los documentos (Fracción III)"),
            Block::markdown(
                r#"
**La ley obliga a la Administración a:** * **Guardar y conservar toda la documentación** del condominio para que los propietarios puedan **consultarla en cualquier momento.**

**El incumplimiento:** * La documentación **casi nunca está disponible**, lo que representa una **falta crónica** de transparencia y acceso a la información.
"#,
            ),
            Block::subheading("2. ⏱️ Las convocatorias son tardías (Fracción VII)"),
            Block::markdown(
                r#"
**La ley obliga a la Administración a:** * **Convocar a todas las asambleas** (generales y extraordinarias) **respetando estrictamente los plazos** y reglas que marca la ley y el reglamento interno.

**El incumplimiento:** * Se han registrado múltiples ocasiones en las que las convocatorias se emitieron **fuera del tiempo reglamentario**, afectando la correcta organización de las reuniones y la participación.
"#,
            ),
            Block::subheading("3. ✍️ Las actas de asamblea son deficientes (Fracción V)"),
            Block::markdown(
                r#"
**La ley obliga a la Administración a:** * **Llevar un "Libro de Actas"** formal, registrar en él todos los acuerdos y **comunicarlos por escrito** a cada propietario.

**El incumplimiento:**

* **Actas Informales:** En lugar de actas formales, se han usado **mensajes informales de WhatsApp**. En el caso de febrero de 2025, el mensaje contenía además **errores de cálculo** en los gastos.
* **Deslindan su Responsabilidad:** La Mesa Directiva ha aseverado incorrectamente que la obligación de llevar y conservar las actas recae en los asistentes, cuando la ley es **categórica** al asignar esta tarea a la **Administración** (a través de su secretario).
"#,
            ),
            Block::warning(
                "⚠️",
                "Desde el 13 de Septiembre se solicitaron las minutas faltantes a la Administración y Mesa Directiva, hasta el momento no han podido ser compartidas.",
            ),
            Block::warning(
                "⚠️",
                "En su caso se puede llegar a desconocer los acuerdos de la Asambleas.",
            ),
            Block::Divider,
            Block::error(
                r#"
**Conclusión:** Este cúmulo de violaciones a la ley y la defensa de procedimientos irregulares
por parte de la Mesa Directiva y Administración exige una **corrección inmediata** para restablecer la legalidad en el condominio.
"#,
            ),
        ],
    )
}

fn delegated_duties() -> Section {
    collapsible(
        "🛡️ Incumplimiento de Funciones Estatutarias (Delegación Operativa)",
        vec![Block::markdown(
            r#"
Ante las quejas sobre deficiencias de la seguridad del Fraccionamiento Aurea de los vecinos, el Presidente de la Mesa Directiva ha indicado a los vecinos: **"Vayan ustedes a expresar esas inconformidades directamente"**.

Esta instrucción constituye una **delegación inapropiada** de responsabilidades y un **incumplimiento de las funciones estatutarias** del Consejo Directivo del Fraccionamiento Aurea, las cuales incluyen:
* Asociación Condominal AUREA, A.C. a través de El Consejo Directivo tiene como objeto vigilar que el Administrador General cumpla con sus obligaciones.
* El Administrador General también se encarga de la coordinación y dirección de los servicios de Seguridad del Conjunto Urbano.

**Nota: ¿Ustedes ya saben quiénes de la Privada Parma integran el Consejo Directivo? ¿La Administración o la Mesa Directiva informaron cuándo se formó?**

**💡 Hint**: Es el mismo que los manda a quejarse directamente con la seguridad, ¿Cuándo asumira su responsabilidad y transparencia de sus acciones?
"#,
        )],
    )
}

fn conclusion() -> Section {
    Section::Text {
        blocks: vec![
            Block::Divider,
            Block::error("### 🛑 Conclusión Formal y Solicitud de Auditoría Externa:"),
            Block::markdown(
                r#"
La combinación de la **pérdida de capital (Fondo Convive)**, las **inconsistencias contables persistentes** (incluyendo las detalladas en la sección de *Aclaraciones Contables Específicas*), el **incremento de gasto no justificado**, el **riesgo fiduciario**, el **incumplimiento en la entrega de protocolos de seguridad** y la **violación de los deberes legales** (Art. 31) configuran una situación de alto riesgo financiero y operacional que exige la acción inmediata.

**Requerimientos Inmediatos:**
1.  **Justificación documentada** de la inacción para ajustar la cuota de mantenimiento.
2.  **Entrega de todos los protocolos documentales** y estados de cuenta para auditoría.
3.  **Auditoría externa** para validar la consistencia de los balances.
4.  **Clarificación exhaustiva y documentación de respaldo** de los movimientos contables detallados en el punto *Aclaraciones Contables Específicas*.
5.  **Entrega inmediata de los Protocolos Operacionales de Portería** (Pendiente por casi un año).
6.  **Apego Inmediato al Artículo 31, Fracciones III, V y VII**, con la regularización de la documentación y minutas.
"#,
            ),
        ],
    }
}
